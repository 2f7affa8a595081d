//! Lazy Video
//!
//! Attaches the video source the first time the element scrolls into view,
//! pauses while the window is hidden and swaps in a fallback on error. The
//! playback decisions come from [`LazyVideo`]; the webview only reports
//! visibility and carries out play/pause.

use bizcard_core::{LazyVideo, VideoAction, VideoSettings};
use dioxus::prelude::*;

use crate::platform;

fn observe_script(dom_id: &str) -> String {
    format!(
        r#"
        const el = document.getElementById("{dom_id}");
        if (el) {{
            const io = new IntersectionObserver((entries) => {{
                if (entries.some((e) => e.isIntersecting)) {{
                    io.disconnect();
                    dioxus.send("visible");
                }}
            }}, {{ rootMargin: "50px" }});
            io.observe(el);
        }}
        document.addEventListener("visibilitychange", () => {{
            dioxus.send(document.hidden ? "hidden" : "shown");
        }});
        "#
    )
}

fn media_script(dom_id: &str, action: VideoAction) -> Option<String> {
    let call = match action {
        VideoAction::None => return None,
        VideoAction::Load => "load()",
        VideoAction::LoadAndPlay => "load(); el.play().catch(() => {})",
        VideoAction::Play => "play().catch(() => {})",
        VideoAction::Pause => "pause()",
    };
    Some(format!(
        r#"const el = document.getElementById("{dom_id}"); if (el) {{ el.{call}; }}"#
    ))
}

#[component]
pub fn LazyVideoPlayer(index: usize, settings: VideoSettings) -> Element {
    let dom_id = format!("promo-video-{}", index);
    let mut video = use_signal(|| {
        let video = LazyVideo::new(settings.src.clone()).with_autoplay(settings.autoplay);
        if settings.lazy {
            video
        } else {
            video.eager()
        }
    });

    use_future({
        let dom_id = dom_id.clone();
        move || {
            let dom_id = dom_id.clone();
            async move {
                let mut events = document::eval(&observe_script(&dom_id));
                while let Ok(event) = events.recv::<String>().await {
                    let action = match event.as_str() {
                        "visible" => {
                            let reduced = platform::prefers_reduced_motion().await;
                            video.write().on_visible(reduced)
                        }
                        "hidden" => video.peek().on_page_visibility(true),
                        "shown" => video.peek().on_page_visibility(false),
                        _ => VideoAction::None,
                    };
                    if let Some(script) = media_script(&dom_id, action) {
                        // Let the re-render attach the source before `load()`.
                        tokio::task::yield_now().await;
                        document::eval(&script);
                    }
                }
            }
        }
    });

    let state = video.read().clone();

    if state.is_failed() {
        return rsx! {
            div { class: "video-fallback", role: "img", "aria-label": "Video not available",
                p { "Video not available" }
            }
        };
    }

    let src = state.should_attach_source().then(|| state.src.clone());

    rsx! {
        video {
            id: "{dom_id}",
            class: "promo-video",
            src,
            poster: settings.poster.clone(),
            preload: if state.lazy { "none" } else { "metadata" },
            muted: true,
            playsinline: true,
            controls: true,
            onerror: move |_| video.write().on_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_script_for_no_action() {
        assert!(media_script("v", VideoAction::None).is_none());
    }

    #[test]
    fn pause_targets_element() {
        let script = media_script("promo-video-0", VideoAction::Pause).unwrap();
        assert!(script.contains(r#"getElementById("promo-video-0")"#));
        assert!(script.contains("el.pause()"));
    }

    #[test]
    fn observer_reports_visibility_changes() {
        let script = observe_script("promo-video-1");
        assert!(script.contains("IntersectionObserver"));
        assert!(script.contains("visibilitychange"));
    }
}
