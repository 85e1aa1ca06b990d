//! End-to-end checks on a generated .pptx: package structure, slide
//! geometry and the contents of every month table.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use wallcal::calendar::{CalendarOptions, Layout, MonthDescriptor, theme, write_year_calendar};

#[derive(Debug, Default, Clone)]
struct Cell {
    text: String,
    fill: Option<String>,
    color: Option<String>,
    bold: bool,
}

#[derive(Debug, Default)]
struct Table {
    x: i64,
    y: i64,
    grid_cols: Vec<i64>,
    rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Default)]
struct TextBox {
    text: String,
    x: i64,
    y: i64,
    wrap: Option<String>,
}

#[derive(Debug, Default)]
struct Slide {
    text_boxes: Vec<TextBox>,
    tables: Vec<Table>,
}

fn attr(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name.as_bytes())
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

fn attr_i64(e: &BytesStart<'_>, name: &str) -> i64 {
    attr(e, name).and_then(|v| v.parse().ok()).unwrap_or_default()
}

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

fn parse_slide(xml: &str) -> Slide {
    let mut reader = Reader::from_str(xml);
    let mut slide = Slide::default();
    let mut in_sp = false;
    let mut in_tcpr = false;
    let mut in_rpr = false;

    loop {
        let event = reader.read_event().unwrap();
        match &event {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"p:sp" => {
                    in_sp = true;
                    slide.text_boxes.push(TextBox::default());
                },
                b"p:graphicFrame" => slide.tables.push(Table::default()),
                b"a:off" => {
                    if in_sp {
                        let tb = slide.text_boxes.last_mut().unwrap();
                        tb.x = attr_i64(e, "x");
                        tb.y = attr_i64(e, "y");
                    } else if let Some(table) = slide.tables.last_mut() {
                        table.x = attr_i64(e, "x");
                        table.y = attr_i64(e, "y");
                    }
                },
                b"a:bodyPr" if in_sp => {
                    slide.text_boxes.last_mut().unwrap().wrap = attr(e, "wrap");
                },
                b"a:gridCol" => slide.tables.last_mut().unwrap().grid_cols.push(attr_i64(e, "w")),
                b"a:tr" => slide.tables.last_mut().unwrap().rows.push(Vec::new()),
                b"a:tc" => {
                    let table = slide.tables.last_mut().unwrap();
                    table.rows.last_mut().unwrap().push(Cell::default());
                },
                b"a:tcPr" => in_tcpr = matches!(event, Event::Start(_)),
                b"a:rPr" if !in_sp => {
                    in_rpr = matches!(event, Event::Start(_));
                    if let Some(cell) = current_cell(&mut slide) {
                        cell.bold = attr(e, "b").as_deref() == Some("1");
                    }
                },
                b"a:srgbClr" if !in_sp => {
                    let val = attr(e, "val");
                    if let Some(cell) = current_cell(&mut slide) {
                        if in_tcpr {
                            cell.fill = val;
                        } else if in_rpr {
                            cell.color = val;
                        }
                    }
                },
                _ => {},
            },
            Event::End(e) => match e.name().as_ref() {
                b"p:sp" => in_sp = false,
                b"a:tcPr" => in_tcpr = false,
                b"a:rPr" => in_rpr = false,
                _ => {},
            },
            Event::Text(t) => {
                let text = String::from_utf8_lossy(t).into_owned();
                if in_sp {
                    slide.text_boxes.last_mut().unwrap().text.push_str(&text);
                } else if let Some(cell) = current_cell(&mut slide) {
                    cell.text.push_str(&text);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }
    slide
}

fn current_cell(slide: &mut Slide) -> Option<&mut Cell> {
    slide.tables.last_mut()?.rows.last_mut()?.last_mut()
}

fn generate(year: i32, theme_id: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let opts = CalendarOptions::new(year).with_theme(theme::lookup(theme_id).unwrap());
    let path = write_year_calendar(&opts, dir.path().join(wallcal::calendar::default_output_name(year))).unwrap();
    (dir, path)
}

#[test]
fn test_package_parts() {
    let (_dir, path) = generate(2026, "1");
    assert_eq!(path.file_name().unwrap(), "Calendar_2026.pptx");

    let archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/_rels/slide1.xml.rels",
    ] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
    assert!(!names.contains(&"ppt/slides/slide2.xml"));

    let content_types = read_part(&path, "[Content_Types].xml");
    assert!(content_types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
    assert!(content_types.contains("application/vnd.openxmlformats-officedocument.presentationml.slide+xml"));

    let presentation = read_part(&path, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    assert_eq!(presentation.matches("<p:sldId ").count(), 1);

    let slide_rels = read_part(&path, "ppt/slides/_rels/slide1.xml.rels");
    assert!(slide_rels.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));

    let core = read_part(&path, "docProps/core.xml");
    assert!(core.contains("<dc:title>Calendar 2026</dc:title>"));
}

#[test]
fn test_month_titles_and_positions() {
    let (_dir, path) = generate(2026, "1");
    let slide = parse_slide(&read_part(&path, "ppt/slides/slide1.xml"));
    let layout = Layout::widescreen();

    assert_eq!(slide.text_boxes.len(), 12);
    assert_eq!(slide.tables.len(), 12);

    let titles: Vec<&str> = slide.text_boxes.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(titles[0], "January 2026");
    assert_eq!(titles[5], "June 2026");
    assert_eq!(titles[11], "December 2026");

    for (index, (title, table)) in slide.text_boxes.iter().zip(&slide.tables).enumerate() {
        let (x, y) = layout.cell_origin(index);
        assert_eq!((title.x, title.y), (x, y), "title {}", index);
        assert_eq!(title.wrap.as_deref(), Some("square"));
        assert_eq!(table.x, x);
        assert_eq!(table.y, y + layout.title_height + layout.table_gap);
        assert_eq!(table.grid_cols.len(), 7);
        assert_eq!(table.grid_cols.iter().sum::<i64>(), layout.calendar_width);
    }
}

#[test]
fn test_table_contents_match_months() {
    let (_dir, path) = generate(2026, "2");
    let slide = parse_slide(&read_part(&path, "ppt/slides/slide1.xml"));

    for (index, table) in slide.tables.iter().enumerate() {
        let month = MonthDescriptor::new(2026, index as u32 + 1).unwrap();
        assert_eq!(table.rows.len(), month.table_rows(), "{}", month.name);

        let header: Vec<&str> = table.rows[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(header, ["S", "M", "T", "W", "T", "F", "S"]);
        for cell in &table.rows[0] {
            assert_eq!(cell.fill.as_deref(), Some("1F497D"));
            assert_eq!(cell.color.as_deref(), Some("FFFFFF"));
            assert!(cell.bold);
        }

        let days: Vec<String> = table.rows[1..]
            .iter()
            .flatten()
            .map(|c| c.text.clone())
            .collect();
        let expected: Vec<String> = month
            .cells()
            .into_iter()
            .map(|d| d.map(|d| d.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(days, expected, "{}", month.name);
        assert!(table.rows[1..].iter().flatten().all(|c| c.fill.is_none() && !c.bold));
    }
}

#[test]
fn test_light_theme_uses_black_header_text() {
    let (_dir, path) = generate(2024, "12");
    let slide = parse_slide(&read_part(&path, "ppt/slides/slide1.xml"));
    let header = &slide.tables[0].rows[0][0];
    assert_eq!(header.fill.as_deref(), Some("FFFFFF"));
    assert_eq!(header.color.as_deref(), Some("000000"));

    // 2024 is a leap year
    let feb = &slide.tables[1];
    assert!(feb.rows.iter().flatten().any(|c| c.text == "29"));
}
