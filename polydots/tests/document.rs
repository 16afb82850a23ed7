use polydots::document::{fill_color, load_source_paths, path_elements};
use polydots::{Color, CommandPolicy, LoadError, ParseError, Point};

const APPLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <g id="leaf">
    <path id="p1" fill="#3a7" d="M 0 0 L 10 0 L 5 10 Z"/>
  </g>
  <rect x="0" y="0" width="5" height="5"/>
  <path id="p2" fill="#FF0000" d="M 10 0 L 20 0 L 15 10 Z"/>
  <path id="nod" fill="#000"/>
</svg>"##;

#[test]
fn collects_nested_paths_in_order() {
    let els = path_elements(APPLE).unwrap();
    assert_eq!(els.len(), 2, "rect and d-less path are skipped");
    assert_eq!(els[0].id.as_deref(), Some("p1"));
    assert_eq!(els[1].fill.as_deref(), Some("#FF0000"));
}

#[test]
fn source_paths_carry_fill_and_points() {
    let paths = load_source_paths(APPLE, CommandPolicy::Reject).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].fill, Color { r: 0x33, g: 0xaa, b: 0x77 });
    assert_eq!(paths[1].fill, Color { r: 255, g: 0, b: 0 });
    assert_eq!(paths[0].subpaths.len(), 1);
    assert_eq!(paths[0].subpaths[0].last(), Some(&Point::new(0.0, 0.0)));
}

#[test]
fn fill_parsing_and_fallback() {
    assert_eq!(fill_color(Some("#abc")), Color { r: 0xaa, g: 0xbb, b: 0xcc });
    assert_eq!(fill_color(Some("123456")), Color { r: 0x12, g: 0x34, b: 0x56 });
    assert_eq!(fill_color(Some("none")), Color::BLACK);
    assert_eq!(fill_color(Some("#12345")), Color::BLACK);
    assert_eq!(fill_color(None), Color::BLACK);
    assert_eq!(Color { r: 255, g: 8, b: 0 }.to_hex(), "#ff0800");
    assert_eq!(Color { r: 1, g: 2, b: 3 }.to_rgba_css(0.5), "rgba(1, 2, 3, 0.5)");
}

#[test]
fn bad_path_reports_index_and_id() {
    let svg = r#"<svg><path id="ok" d="M0 0 L1 0 L0 1 Z"/><path id="bad" d="M0 0 Q 1 1 2 2"/></svg>"#;
    let err = load_source_paths(svg, CommandPolicy::Reject).unwrap_err();
    match &err {
        LoadError::Path { index, id, source } => {
            assert_eq!(*index, 1);
            assert_eq!(id.as_deref(), Some("bad"));
            assert!(matches!(source, ParseError::UnsupportedCommand { command: 'Q', .. }));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.code(), "parse_error");
    assert!(err.to_string().contains("(bad)"));
}

#[test]
fn invalid_xml_and_empty_documents() {
    let e = load_source_paths("<svg><path d=", CommandPolicy::Reject).unwrap_err();
    assert!(matches!(e, LoadError::InvalidSvg(_)));
    assert_eq!(e.code(), "invalid_svg");

    let e = load_source_paths("<svg><circle r=\"4\"/></svg>", CommandPolicy::Reject).unwrap_err();
    assert_eq!(e, LoadError::NoPaths);

    let e = load_source_paths("<svg><path d=\"\"/></svg>", CommandPolicy::Reject).unwrap_err();
    assert_eq!(e, LoadError::NoPaths);
}
