//! Server-rendered HTML pages.
//!
//! One askama template struct per page; the shared layout lives in
//! `templates/base.html`. Handlers own the data shaping — templates only
//! iterate and print.

use askama::Template;

use crate::upstream::Modality;

/// Landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

/// Modality list with the add form and per-row delete forms.
#[derive(Template)]
#[template(path = "modalities.html")]
pub struct ModalitiesPage {
    pub modalities: Vec<Modality>,
}

/// Upstream system information as a key/value table.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusPage {
    pub entries: Vec<(String, String)>,
}

/// Project information page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modalities_page_renders_every_row() {
        let page = ModalitiesPage {
            modalities: vec![
                Modality {
                    name: "CT1".to_string(),
                    aet: "CT".to_string(),
                    host: "10.0.0.5".to_string(),
                    port: 104,
                },
                Modality {
                    name: "MR1".to_string(),
                    aet: "MR".to_string(),
                    host: "10.0.0.6".to_string(),
                    port: 11112,
                },
            ],
        };
        let html = page.render().unwrap();
        assert!(html.contains("CT1"));
        assert!(html.contains("MR1"));
        assert!(html.contains("/modalities/delete/CT1"));
        assert!(html.contains("11112"));
    }

    #[test]
    fn modality_names_are_escaped() {
        let page = ModalitiesPage {
            modalities: vec![Modality {
                name: "<script>".to_string(),
                aet: String::new(),
                host: String::new(),
                port: 0,
            }],
        };
        let html = page.render().unwrap();
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn status_page_renders_entries() {
        let page = StatusPage {
            entries: vec![
                ("ApiVersion".to_string(), "23".to_string()),
                ("DicomAet".to_string(), "ORTHANC".to_string()),
            ],
        };
        let html = page.render().unwrap();
        assert!(html.contains("ApiVersion"));
        assert!(html.contains("ORTHANC"));
    }

    #[test]
    fn static_pages_render() {
        assert!(IndexPage.render().unwrap().contains("Modalities"));
        assert!(AboutPage.render().unwrap().contains("Orthanc"));
    }
}
