//! HTML rendering of generated identifier records.
//!
//! Templates are compiled into the binary and rendered with minijinja. Every
//! family page extends `layout.html`; `.html` templates are auto-escaped.

use malo_id::{IdGenerator, IdRecord};
use minijinja::{context, Environment, UndefinedBehavior};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../static/templates/layout.html")),
    ("banner.html", include_str!("../static/templates/banner.html")),
    ("malo.html", include_str!("../static/templates/malo.html")),
    ("nelo.html", include_str!("../static/templates/nelo.html")),
    ("melo.html", include_str!("../static/templates/melo.html")),
    ("trid.html", include_str!("../static/templates/trid.html")),
    ("srid.html", include_str!("../static/templates/srid.html")),
];

fn template_name(generator: IdGenerator) -> &'static str {
    match generator {
        IdGenerator::MaLo => "malo.html",
        IdGenerator::NeLo => "nelo.html",
        IdGenerator::MeLo => "melo.html",
        IdGenerator::Tr => "trid.html",
        IdGenerator::Sr => "srid.html",
    }
}

fn division_symbol(division: &str) -> &'static str {
    match division {
        "GAS" => "\u{1F525}",
        _ => "\u{26A1}",
    }
}

/// Page renderer holding the parsed template environment.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Parses all embedded templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        // a record field missing from a template is a bug, not an empty span
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a complete HTML page for a record produced by `generator`.
    pub fn render_page(
        &self,
        generator: IdGenerator,
        record: &IdRecord,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(template_name(generator))?;
        template.render(context! {
            record => record,
            division_symbol => record.field("division").map(division_symbol),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_every_generator_renders_its_record() {
        let renderer = Renderer::new().unwrap();
        for generator in IdGenerator::ALL {
            let record = generator.generate().unwrap();
            let page = renderer.render_page(generator, &record).unwrap();
            assert!(page.contains(&record.id), "{generator}: {page}");
            assert!(page.contains(&format!("<title>{} Generator</title>", record.id_type)));
            assert!(!page.contains("{{"), "{generator}: {page}");
        }
    }

    #[test]
    fn test_malo_page_shows_issuer_and_division() {
        let renderer = Renderer::new().unwrap();
        let record = IdGenerator::MaLo.generate().unwrap();
        let page = renderer.render_page(IdGenerator::MaLo, &record).unwrap();

        let issuer = record.field("issuer").unwrap();
        assert!(page.contains(issuer));
        let symbol = division_symbol(record.field("division").unwrap());
        assert!(page.contains(symbol));
    }

    #[test]
    fn test_page_carries_banner_comment() {
        let renderer = Renderer::new().unwrap();
        let record = IdGenerator::NeLo.generate().unwrap();
        let page = renderer.render_page(IdGenerator::NeLo, &record).unwrap();
        assert!(page.contains("<!--"));
        assert!(page.contains("Jobangebote"));
    }

    #[test]
    fn test_values_are_html_escaped() {
        let renderer = Renderer::new().unwrap();
        let record = IdRecord {
            id: "<b>".to_string(),
            id_type: "TR",
            fields: BTreeMap::from([
                ("trIdWithoutChecksum", "<script>".to_string()),
                ("checksum", "&".to_string()),
            ]),
        };
        let page = renderer.render_page(IdGenerator::Tr, &record).unwrap();
        assert!(page.contains("&lt;script&gt;"), "{page}");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&amp;"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let renderer = Renderer::new().unwrap();
        let record = IdRecord {
            id: "E1234567899".to_string(),
            id_type: "NeLo",
            fields: BTreeMap::new(),
        };
        assert!(renderer.render_page(IdGenerator::NeLo, &record).is_err());
    }
}
