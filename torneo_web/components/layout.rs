use dioxus::prelude::*;
use rust_i18n::t;

/// Main body layout component (to be wrapped in HTML shell)
#[component]
pub fn PageLayout(nav_active: String, children: Element) -> Element {
    let nav_class = |page: &str| -> String {
        if nav_active == page {
            "nav-link nav-active".to_string()
        } else {
            "nav-link".to_string()
        }
    };
    let title = t!("app.title");
    let partidas = t!("nav.partidas");
    let jugadores = t!("nav.jugadores");
    let footer_text = t!("app.footer");

    rsx! {
        header { class: "bg-white border-b border-gray-300 shadow-sm",
            div { class: "container mx-auto flex justify-between items-center py-2",
                div { class: "font-bold text-2xl text-gray-700",
                    a { href: "/", "{title}" }
                }
                nav { class: "space-x-4 text-sm font-bold text-gray-600",
                    a { class: "{nav_class(\"partidas\")}", href: "/partidas", "{partidas}" }
                    a { class: "{nav_class(\"jugadores\")}", href: "/jugadores", "{jugadores}" }
                }
            }
        }
        main { class: "flex-grow container mx-auto py-6",
            {children}
        }
        footer { class: "bg-gray-100 border-t border-gray-300 py-4 mt-auto",
            div { class: "container mx-auto text-center text-sm text-gray-600", "{footer_text}" }
        }
    }
}

/// Generate the complete HTML document around a rendered body.
pub fn wrap_in_html(title: &str, body_content: &str) -> String {
    let title_tag = dioxus_ssr::render_element(rsx! {
        title { "{title}" }
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {}
</head>
<body class="flex flex-col min-h-screen">
{}
</body>
</html>"#,
        rust_i18n::locale().to_string(),
        title_tag,
        body_content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_html_escapes_title() {
        let html = wrap_in_html("<script>alert(1)</script>", "<p>body</p>");

        assert!(!html.contains("<script>"), "got: {}", html);
        assert!(html.contains("&lt;script&gt;"), "got: {}", html);
        assert!(html.contains("<p>body</p>"));
    }
}
