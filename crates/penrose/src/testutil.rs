//! Helpers for inspecting rendered documents in tests.

use quick_xml::events::Event;
use quick_xml::Reader;

/// The attributes of one `<path>` element that tests care about.
#[derive(Debug, Clone)]
pub struct PathAttrs {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub d: String,
}

/// Every `<path>` in document order. Panics on malformed XML.
pub fn parse_paths(svg: &str) -> Vec<PathAttrs> {
    let mut reader = Reader::from_str(svg);
    let mut paths = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"path" => {
                let attr = |name: &str| {
                    e.try_get_attribute(name)
                        .expect("malformed attribute")
                        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
                };
                paths.push(PathAttrs {
                    fill: attr("fill"),
                    stroke: attr("stroke"),
                    d: attr("d").unwrap_or_default(),
                });
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed SVG at {}: {e}", reader.buffer_position()),
            _ => {}
        }
    }
    paths
}

/// An attribute of the root `<svg>` element.
pub fn root_attribute(svg: &str, name: &str) -> Option<String> {
    let mut reader = Reader::from_str(svg);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"svg" => {
                return e
                    .try_get_attribute(name)
                    .ok()
                    .flatten()
                    .map(|a| String::from_utf8_lossy(&a.value).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
    }
}
