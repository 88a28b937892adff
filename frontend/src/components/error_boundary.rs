//! Error boundaries for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px; padding: 32px; color: #111827;",
                        h1 {
                            style: "color: #B91C1C; font-size: 36px; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color: #4B5563; font-size: 18px; margin: 0;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            class: "x-button-primary",
                            style: "width: fit-content;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "border: 1px solid #FCA5A5; padding: 12px; border-radius: 8px; text-wrap: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-button-primary",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Fetch failures are shown with this, never with the empty-result message.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 48px 16px;
                text-align: center;
            ",

            div {
                style: "color: #B91C1C; font-size: 24px; font-weight: 600;",
                "Could not load venues",
            }

            p {
                style: "color: #6B7280; font-size: 16px; margin: 0; max-width: 500px;",
                "{error_txt}"
            }

            {children}
        }
    }
}
