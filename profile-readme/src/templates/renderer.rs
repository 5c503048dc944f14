//! Fragment renderer.

use super::collapse::collapse_markup;
use crate::github::RepositoryMetadata;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use serde_json::json;

/// Hours between two scheduled refreshes.
pub const REFRESH_INTERVAL_HOURS: i64 = 24;

const PROJECTS_TEMPLATE: &str = r#"
<table>
  <thead align="center">
    <tr>
      <td><b>🎁 Projects</b></td>
      <td><b>⭐ Stars</b></td>
      <td><b>🕐 Created At</b></td>
      <td><b>📅 Last Active At</b></td>
    </tr>
  </thead>
  <tbody>
  {{#each repositories}}
    <tr>
      <td>
        <a href="{{html_url}}" target="_blank"><b>{{full_name}}</b></a>
        {{#if homepage}}<a href="{{homepage}}" target="_blank">🔗</a>{{/if}}
      </td>
      <td><img alt="Stars" src="https://img.shields.io/github/stars/{{full_name}}?style=flat-square&labelColor=343b41"/></td>
      <td>{{created}}</td>
      <td>{{pushed}}</td>
    </tr>
  {{/each}}
  </tbody>
</table>
"#;

const FOOTER_TEMPLATE: &str = r#"
<p align="center">
  This <i>README</i> is regenerated automatically <b>every {{interval}} hours</b>!
  <br/>
  Refreshed at: {{refreshed_at}}
  <br/>
  Next refresh: {{next_refresh}}
</p>
"#;

/// Date format of the project table ("3/4/2021").
const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Short date and time format of the footer ("3/4/21, 1:06 PM").
const DATE_TIME_FORMAT: &str = "%-m/%-d/%y, %-I:%M %p";

/// One row of the project table.
#[derive(Debug, Serialize)]
struct ProjectRow<'a> {
    full_name: &'a str,
    html_url: &'a str,
    homepage: Option<&'a str>,
    created: String,
    pushed: String,
}

/// Creates the Handlebars registry used for README fragments.
///
/// Escaping is disabled since fragments are markup, and strict mode
/// rejects references to missing fields.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the generated README fragments.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the project table, one row per repository in the given order.
    ///
    /// Dates are shown in `time_zone`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_projects_table(
        &self,
        repositories: &[RepositoryMetadata],
        time_zone: Tz,
    ) -> Result<String, super::TemplateError> {
        let rows: Vec<ProjectRow<'_>> = repositories
            .iter()
            .map(|repo| ProjectRow {
                full_name: &repo.full_name,
                html_url: &repo.html_url,
                homepage: repo.homepage.as_deref(),
                created: format_date(repo.created_at, time_zone),
                pushed: repo
                    .pushed_at
                    .map_or_else(|| "-".to_string(), |at| format_date(at, time_zone)),
            })
            .collect();

        self.render(PROJECTS_TEMPLATE, &json!({ "repositories": rows }))
    }

    /// Renders the refresh footer for a run started at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_footer(
        &self,
        now: DateTime<Utc>,
        time_zone: Tz,
    ) -> Result<String, super::TemplateError> {
        let next = now + Duration::hours(REFRESH_INTERVAL_HOURS);
        let data = json!({
            "interval": REFRESH_INTERVAL_HOURS,
            "refreshed_at": format_date_time(now, time_zone),
            "next_refresh": format_date_time(next, time_zone),
        });

        self.render(FOOTER_TEMPLATE, &data)
    }

    fn render(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, super::TemplateError> {
        let rendered = self.handlebars.render_template(template, data)?;
        Ok(collapse_markup(&rendered))
    }
}

fn format_date(at: DateTime<Utc>, time_zone: Tz) -> String {
    at.with_timezone(&time_zone).format(DATE_FORMAT).to_string()
}

fn format_date_time(at: DateTime<Utc>, time_zone: Tz) -> String {
    at.with_timezone(&time_zone)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repository(full_name: &str, homepage: Option<&str>) -> RepositoryMetadata {
        RepositoryMetadata {
            full_name: full_name.to_string(),
            html_url: format!("https://github.com/{full_name}"),
            homepage: homepage.map(str::to_string),
            created_at: "2021-03-04T05:06:07Z".parse().unwrap(),
            pushed_at: Some("2024-01-02T03:04:05Z".parse().unwrap()),
            stargazers_count: 3,
        }
    }

    #[test]
    fn table_has_header_and_rows_in_order() {
        let renderer = TemplateRenderer::new();
        let repos = vec![sample_repository("a/y", None), sample_repository("a/x", None)];

        let table = renderer
            .render_projects_table(&repos, chrono_tz::UTC)
            .unwrap();

        assert!(table.starts_with("<table><thead align=center><tr><td><b>🎁 Projects</b></td>"));
        assert!(table.ends_with("</tbody></table>"));
        assert_eq!(table.matches("<tr>").count(), 3);
        let y = table.find("<b>a/y</b>").unwrap();
        let x = table.find("<b>a/x</b>").unwrap();
        assert!(y < x);
    }

    #[test]
    fn table_row_columns() {
        let renderer = TemplateRenderer::new();
        let repos = vec![sample_repository("a/x", None)];

        let table = renderer
            .render_projects_table(&repos, chrono_tz::UTC)
            .unwrap();

        assert!(table.contains(
            "<td><a href=https://github.com/a/x target=_blank><b>a/x</b></a></td>"
        ));
        assert!(table.contains(
            r#"<img alt=Stars src="https://img.shields.io/github/stars/a/x?style=flat-square&labelColor=343b41"/>"#
        ));
        assert!(table.contains("<td>3/4/2021</td><td>1/2/2024</td>"));
        assert!(!table.contains('\n'));
    }

    #[test]
    fn table_links_homepage_when_present() {
        let renderer = TemplateRenderer::new();
        let repos = vec![sample_repository("a/x", Some("https://x.example.com/"))];

        let table = renderer
            .render_projects_table(&repos, chrono_tz::UTC)
            .unwrap();

        assert!(table.contains(
            "<b>a/x</b></a> <a href=https://x.example.com/ target=_blank>🔗</a></td>"
        ));
    }

    #[test]
    fn table_dates_follow_time_zone() {
        let renderer = TemplateRenderer::new();
        let mut repo = sample_repository("a/x", None);
        repo.created_at = "2021-03-04T20:00:00Z".parse().unwrap();
        repo.pushed_at = None;

        let table = renderer
            .render_projects_table(&[repo], chrono_tz::Asia::Shanghai)
            .unwrap();

        assert!(table.contains("<td>3/5/2021</td><td>-</td>"));
    }

    #[test]
    fn empty_table_has_only_header() {
        let renderer = TemplateRenderer::new();

        let table = renderer.render_projects_table(&[], chrono_tz::UTC).unwrap();

        assert!(table.ends_with("</thead><tbody></tbody></table>"));
    }

    #[test]
    fn footer_shows_now_and_next_refresh() {
        let renderer = TemplateRenderer::new();
        let now: DateTime<Utc> = "2024-01-02T03:04:05Z".parse().unwrap();

        let footer = renderer
            .render_footer(now, chrono_tz::Asia::Shanghai)
            .unwrap();

        assert_eq!(
            footer,
            "<p align=center>This <i>README</i> is regenerated automatically \
             <b>every 24 hours</b>!<br/>Refreshed at: 1/2/24, 11:04 AM<br/>\
             Next refresh: 1/3/24, 11:04 AM</p>"
        );
    }
}
