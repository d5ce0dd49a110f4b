//! Pure renderers: content rows in, HTML nodes out.
//!
//! Each function renders one row into one node. Optional columns decide
//! which sub-elements appear. Every interpolated value is HTML-escaped.

use folio_types::content::{BlogPost, ContentKind, Project, Skill, Testimonial};
use serde::de::DeserializeOwned;

use crate::html::escape;

const CARD_CLASS: &str = "bg-white rounded-xl shadow-lg p-4 hover:shadow-2xl hover:scale-105 transition-transform duration-300 dark:bg-gray-800";
const SKILL_CLASS: &str = "bg-green-100 text-green-900 rounded-lg p-4 font-medium shadow hover:bg-green-200 transition dark:bg-gray-700 dark:text-gray-200";
const TESTIMONIAL_CLASS: &str = "bg-white rounded-xl shadow p-4 dark:bg-gray-800";

pub fn render_project(project: &Project) -> String {
    let title = escape(&project.title);
    let image = project
        .image_url
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{title}" class="rounded-md mb-4 w-full h-48 object-cover">"#,
                escape(src)
            )
        })
        .unwrap_or_default();
    let live = project
        .live_url
        .as_deref()
        .map(|href| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-green-700 dark:text-green-300 font-medium hover:underline">View Live</a>"#,
                escape(href)
            )
        })
        .unwrap_or_default();
    let github = project
        .github_url
        .as_deref()
        .map(|href| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-gray-700 dark:text-gray-200 font-medium hover:underline">GitHub</a>"#,
                escape(href)
            )
        })
        .unwrap_or_default();
    let description = escape(project.description.as_deref().unwrap_or(""));

    format!(
        r#"<div class="{CARD_CLASS}">{image}<h3 class="text-xl font-semibold mb-2">{title}</h3><p class="text-gray-600 dark:text-gray-300 mb-2">{description}</p><div class="space-x-2">{live}{github}</div></div>"#
    )
}

pub fn render_skill(skill: &Skill) -> String {
    let level = skill.level.map(|l| l.to_string()).unwrap_or_default();
    format!(
        r#"<li class="{SKILL_CLASS}">{} ({level}/10)</li>"#,
        escape(&skill.name)
    )
}

/// Blog cards link out when the post has an external URL, otherwise to the
/// on-site detail page.
pub fn render_blog_post(post: &BlogPost) -> String {
    let title = escape(&post.title);
    let (href, target) = match post.external_url() {
        Some(url) => (escape(url), "_blank"),
        None => (format!("/blog.html?id={}", escape(&post.id.to_string())), "_self"),
    };
    let image = post
        .image_url
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{title}" class="rounded-md mb-4 w-full h-40 object-cover">"#,
                escape(src)
            )
        })
        .unwrap_or_default();
    let excerpt = escape(post.excerpt.as_deref().unwrap_or(""));

    format!(
        r#"<div class="{CARD_CLASS}">{image}<h3 class="text-xl font-semibold mb-2">{title}</h3><p class="text-gray-600 dark:text-gray-300 mb-2 line-clamp-3">{excerpt}</p><div class="mt-auto text-right"><a href="{href}" target="{target}" rel="noopener noreferrer" class="text-green-700 dark:text-green-300 font-medium hover:underline">Read More →</a></div></div>"#
    )
}

pub fn render_testimonial(testimonial: &Testimonial) -> String {
    format!(
        r#"<div class="{TESTIMONIAL_CLASS}"><p class="text-gray-700 dark:text-gray-200 mb-3">"{}"</p><p class="font-semibold">{}</p><p class="text-sm text-gray-500">{}</p></div>"#,
        escape(&testimonial.message),
        escape(&testimonial.author),
        escape(testimonial.role.as_deref().unwrap_or("")),
    )
}

/// The single node shown when a section fails to load.
pub fn render_load_error(kind: ContentKind) -> String {
    format!(r#"<p class="text-red-600">{}</p>"#, kind.load_error_text())
}

/// Decode raw backend rows for `kind` and render one node per row.
///
/// Fails as a whole if any row does not decode.
pub fn render_rows(
    kind: ContentKind,
    rows: Vec<serde_json::Value>,
) -> Result<Vec<String>, serde_json::Error> {
    match kind {
        ContentKind::Projects => decode_and_render(rows, render_project),
        ContentKind::Skills => decode_and_render(rows, render_skill),
        ContentKind::Blog => decode_and_render(rows, render_blog_post),
        ContentKind::Testimonials => decode_and_render(rows, render_testimonial),
    }
}

fn decode_and_render<T: DeserializeOwned>(
    rows: Vec<serde_json::Value>,
    render: fn(&T) -> String,
) -> Result<Vec<String>, serde_json::Error> {
    rows.into_iter()
        .map(|row| serde_json::from_value::<T>(row).map(|item| render(&item)))
        .collect()
}
