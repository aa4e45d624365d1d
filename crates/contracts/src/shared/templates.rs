//! HTML fragments for listing entries
//!
//! Every interpolated value goes through [`escape`] except `description` and
//! `hours`, which carry trusted inline markup from the data files.

use super::escape::{escape, escape_html};
use crate::domain::entry::Entry;
use crate::enums::page_type::Layout;

/// Render one card (activities, museums, sightseeing)
pub fn render_card(entry: &Entry) -> String {
    let tags_html = entry
        .tags()
        .iter()
        .map(|tag| format!(r#"<span class="tag text-tag">{}</span>"#, escape(tag)))
        .collect::<Vec<_>>()
        .join("\n              ");

    let title = escape(entry.card_title());
    let title_html = match entry.url.as_deref() {
        Some(url) => format!(r#"<a href="{}">{}</a>"#, escape(url), title),
        None => title,
    };

    let media_html = match entry.image.as_deref() {
        Some(image) => {
            let credit_html = render_image_credit(entry)
                .map(|credit| {
                    format!(r#"<figcaption class="card__credit text-note">{credit}</figcaption>"#)
                })
                .unwrap_or_default();
            format!(
                r#"<figure class="card__media">
                  <img src="{}" alt="{}">
                  {}
              </figure>"#,
                escape(image),
                escape_html(entry.image_alt.as_deref()),
                credit_html
            )
        }
        None => String::new(),
    };

    format!(
        r#"
          <article class="card" data-status="{status}">
              <div class="card__surface">
              <div class="card__tags">
              {tags_html}
              </div>
                  <h2 class="card__title text-title"> {title_html} </h2>
              {media_html}
              <div class="card__body text-body">
                  <p>{description}</p>
              </div>
              </div>
          </article>"#,
        status = escape(&entry.status),
        description = entry.description.as_deref().unwrap_or_default(),
    )
}

fn render_image_credit(entry: &Entry) -> Option<String> {
    let credit = entry.image_credit.as_deref().filter(|c| !c.is_empty())?;
    let html = match entry.image_credit_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(
            r#"Image courtesy of <a href="{}">{}</a>."#,
            escape(url),
            escape(credit)
        ),
        None => format!("Image courtesy of {}.", escape(credit)),
    };
    Some(html)
}

/// Render one table row (workspots)
pub fn render_row(entry: &Entry) -> String {
    let name = escape(entry.row_name());
    let name_html = match entry.url.as_deref() {
        Some(url) => format!(r#"<a href="{}">{}</a>"#, escape(url), name),
        None => name,
    };

    let location = escape_html(entry.location.as_deref());
    let location_html = match entry.location_url.as_deref() {
        Some(url) => format!(r#"<a href="{}">{}</a>"#, escape(url), location),
        None => location,
    };

    format!(
        r#"
                    <tr data-status="{status}" class="text-body">
                        <th scope="row">{name_html}</th>
                        <td>{borough}</td>
                        <td>{location_html}</td>
                        <td>{hours}</td>
                        <td>{wifi}</td>
                        <td>{kind}</td>
                        <td><span class="status">{status}</span></td>
                    </tr>"#,
        status = escape(&entry.status),
        borough = escape_html(entry.borough_or_location()),
        hours = entry.hours.as_deref().unwrap_or_default(),
        wifi = escape_html(entry.wifi.as_deref()),
        kind = escape_html(entry.kind.as_deref()),
    )
}

/// Render all entries in order and join the fragments
pub fn render_entries(layout: Layout, entries: &[Entry]) -> String {
    let render: fn(&Entry) -> String = match layout {
        Layout::Cards => render_card,
        Layout::Rows => render_row,
    };
    entries.iter().map(render).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn museum() -> Entry {
        Entry {
            title: Some("Museum X".into()),
            tags: Some(vec!["loved".into(), "manhattan".into()]),
            image: Some("a.jpg".into()),
            description: Some("nice".into()),
            ..Entry::new("loved")
        }
    }

    #[test]
    fn test_card_shape() {
        let html = render_card(&museum());
        assert!(html.contains(r#"<article class="card" data-status="loved">"#));
        assert!(html.contains(r#"<span class="tag text-tag">loved</span>"#));
        assert!(html.contains(r#"<span class="tag text-tag">manhattan</span>"#));
        assert!(html.contains("> Museum X </h2>"));
        assert!(html.contains(r#"<img src="a.jpg" alt="">"#));
        assert!(html.contains("<p>nice</p>"));
        assert!(!html.contains("figcaption"));
    }

    #[test]
    fn test_card_title_link_and_escaping() {
        let entry = Entry {
            title: Some("Tom & Jerry's <b>".into()),
            url: Some("https://example.com/?a=1&b=2".into()),
            ..museum()
        };
        let html = render_card(&entry);
        assert!(html.contains(
            r#"<a href="https://example.com/?a=1&amp;b=2">Tom &amp; Jerry&#39;s &lt;b&gt;</a>"#
        ));
    }

    #[test]
    fn test_card_description_is_raw() {
        let entry = Entry {
            description: Some(r#"see <a href="/x">here</a>"#.into()),
            ..museum()
        };
        assert!(render_card(&entry).contains(r#"<p>see <a href="/x">here</a></p>"#));
    }

    #[test]
    fn test_card_credit_line() {
        let mut entry = museum();
        entry.image_credit = Some("Ann <Photo>".into());
        assert!(render_card(&entry).contains(
            r#"<figcaption class="card__credit text-note">Image courtesy of Ann &lt;Photo&gt;.</figcaption>"#
        ));

        entry.image_credit_url = Some("https://ann.example".into());
        assert!(render_card(&entry)
            .contains(r#"Image courtesy of <a href="https://ann.example">Ann &lt;Photo&gt;</a>."#));
    }

    #[test]
    fn test_card_without_tags_or_image() {
        let entry = Entry {
            title: Some("Bare".into()),
            ..Entry::new("to-do")
        };
        let html = render_card(&entry);
        assert!(!html.contains("class=\"tag"));
        assert!(!html.contains("card__media"));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn test_row_shape() {
        let entry = Entry {
            name: Some("Cafe <1>".into()),
            borough: Some("Brooklyn".into()),
            location: Some("Dumbo".into()),
            location_url: Some("https://maps.example".into()),
            hours: Some("9-5<br>Sat".into()),
            wifi: Some("yes".into()),
            ..Entry::new("to-try")
        };
        let html = render_row(&entry);
        assert!(html.contains(r#"<tr data-status="to-try" class="text-body">"#));
        assert!(html.contains(r#"<th scope="row">Cafe &lt;1&gt;</th>"#));
        assert!(html.contains("<td>Brooklyn</td>"));
        assert!(html.contains(r#"<td><a href="https://maps.example">Dumbo</a></td>"#));
        assert!(html.contains("<td>9-5<br>Sat</td>"));
        assert!(html.contains("<td>yes</td>"));
        assert!(html.contains("<td></td>"));
        assert!(html.contains(r#"<span class="status">to-try</span>"#));
    }

    #[test]
    fn test_row_borough_falls_back_to_location() {
        let entry = Entry {
            name: Some("Library".into()),
            location: Some("Queens".into()),
            ..Entry::new("loved")
        };
        let html = render_row(&entry);
        assert_eq!(html.matches("<td>Queens</td>").count(), 2);
    }

    #[test]
    fn test_render_entries_preserves_order() {
        let entries = vec![
            Entry { title: Some("first".into()), ..Entry::new("loved") },
            Entry { title: Some("second".into()), ..Entry::new("to-try") },
        ];
        let html = render_entries(Layout::Cards, &entries);
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<article").count(), 2);

        assert_eq!(render_entries(Layout::Rows, &[]), "");
    }
}
