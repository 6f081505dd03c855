//! Server-side HTML renderer
//!
//! Pages are built with `write!` into a shared layout. Every upstream string
//! goes through [`escape_html`].

use super::{PageData, RenderError, Renderer, Template};
use crate::lookup::ArtistDetails;
use groupie_common::{Artist, Relation};
use std::fmt::Write;

const LAYOUT_HTML: &str = include_str!("../../ui/layout.html");
const TITLE_SLOT: &str = "{{TITLE}}";
const CONTENT_SLOT: &str = "{{CONTENT}}";

/// Renders pages into the bundled layout
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Layout text before the content slot (holds the title slot)
    head: String,
    /// Layout text after the content slot
    tail: String,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_layout(LAYOUT_HTML)
    }

    /// Use a custom layout containing `{{TITLE}}` and `{{CONTENT}}`
    pub fn with_layout(layout: &str) -> Result<Self, RenderError> {
        let (head, tail) = layout
            .split_once(CONTENT_SLOT)
            .ok_or_else(|| layout_error("missing {{CONTENT}} slot"))?;
        if !head.contains(TITLE_SLOT) {
            return Err(layout_error("missing {{TITLE}} slot before content"));
        }
        Ok(Self {
            head: head.to_string(),
            tail: tail.to_string(),
        })
    }

    fn page(&self, title: &str, content: &str) -> String {
        let head = self.head.replace(TITLE_SLOT, &escape_html(title));
        let mut page = String::with_capacity(head.len() + content.len() + self.tail.len());
        page.push_str(&head);
        page.push_str(content);
        page.push_str(&self.tail);
        page
    }
}

fn layout_error(message: &str) -> RenderError {
    RenderError::Template {
        template: "layout.html",
        message: message.to_string(),
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, template: Template, data: &PageData<'_>) -> Result<String, RenderError> {
        let (title, content) = match (template, data) {
            (Template::Index, PageData::Index(artists)) => ("Artists".to_string(), index(artists)?),
            (Template::Artist, PageData::Artist(details)) => {
                (details.artist.name.clone(), artist(details)?)
            }
            (Template::Concerts, PageData::Concerts { artist, relation }) => {
                let title = match artist {
                    Some(a) => format!("{} concerts", a.name),
                    None => "Concerts".to_string(),
                };
                (title, concerts(*artist, relation)?)
            }
            (Template::Error, PageData::Error { status, message }) => {
                (format!("Error {}", status), error(*status, message)?)
            }
            (template, data) => {
                return Err(RenderError::Template {
                    template: template.name(),
                    message: format!("cannot render {} data", data.kind()),
                })
            }
        };

        Ok(self.page(&title, &content))
    }
}

fn index(artists: &[Artist]) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "<h1>Artists</h1>")?;
    if artists.is_empty() {
        writeln!(out, "<p>No artists available.</p>")?;
        return Ok(out);
    }
    writeln!(out, r#"<ul class="artist-grid">"#)?;
    for a in artists {
        writeln!(
            out,
            r#"<li class="artist-card"><a href="/artist?id={id}"><img src="{image}" alt="{name}"><h2>{name}</h2></a></li>"#,
            id = a.id,
            image = escape_html(&a.image),
            name = escape_html(&a.name),
        )?;
    }
    writeln!(out, "</ul>")?;
    Ok(out)
}

fn artist(details: &ArtistDetails<'_>) -> Result<String, RenderError> {
    let a = details.artist;
    let mut out = String::new();
    writeln!(out, "<h1>{}</h1>", escape_html(&a.name))?;
    writeln!(
        out,
        r#"<img class="artist-portrait" src="{}" alt="{}">"#,
        escape_html(&a.image),
        escape_html(&a.name)
    )?;

    writeln!(out, r#"<dl class="facts">"#)?;
    writeln!(out, "<dt>Created</dt><dd>{}</dd>", a.creation_date)?;
    writeln!(out, "<dt>First album</dt><dd>{}</dd>", escape_html(&a.first_album))?;
    writeln!(out, "<dt>Members</dt><dd><ul>")?;
    for member in &a.members {
        writeln!(out, "<li>{}</li>", escape_html(member))?;
    }
    writeln!(out, "</ul></dd>")?;
    writeln!(out, "</dl>")?;

    if let Some(locations) = details.locations {
        writeln!(out, "<h2>Locations</h2><ul>")?;
        for place in &locations.locations {
            writeln!(out, "<li>{}</li>", escape_html(place))?;
        }
        writeln!(out, "</ul>")?;
    }

    if let Some(dates) = details.dates {
        writeln!(out, "<h2>Dates</h2><ul>")?;
        for date in &dates.dates {
            writeln!(out, "<li>{}</li>", escape_html(date))?;
        }
        writeln!(out, "</ul>")?;
    }

    if let Some(relation) = details.relation {
        writeln!(out, "<h2>Concerts</h2>")?;
        schedule(&mut out, relation)?;
        writeln!(out, r#"<p><a href="/concerts?id={}">Full schedule</a></p>"#, a.id)?;
    }

    Ok(out)
}

fn concerts(artist: Option<&Artist>, relation: &Relation) -> Result<String, RenderError> {
    let mut out = String::new();
    match artist {
        Some(a) => writeln!(
            out,
            r#"<h1><a href="/artist?id={}">{}</a> concerts</h1>"#,
            a.id,
            escape_html(&a.name)
        )?,
        None => writeln!(out, "<h1>Concerts</h1>")?,
    }
    schedule(&mut out, relation)?;
    Ok(out)
}

fn schedule(out: &mut String, relation: &Relation) -> Result<(), RenderError> {
    if relation.dates_locations.is_empty() {
        writeln!(out, "<p>No concerts scheduled.</p>")?;
        return Ok(());
    }
    writeln!(out, "<table><tr><th>Location</th><th>Dates</th></tr>")?;
    for (place, dates) in &relation.dates_locations {
        let dates: Vec<String> = dates.iter().map(|d| escape_html(d)).collect();
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(place),
            dates.join("<br>")
        )?;
    }
    writeln!(out, "</table>")?;
    Ok(())
}

fn error(status: u16, message: &str) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, r#"<p class="error-status">{}</p>"#, status)?;
    writeln!(out, "<h1>{}</h1>", escape_html(message))?;
    writeln!(out, r#"<p><a href="/">Back to artists</a></p>"#)?;
    Ok(out)
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
