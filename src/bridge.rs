//! Page bridge between the webview and the Rust state machines.
//!
//! A script evaluated once after mount forwards the browser-only signals
//! (keyboard, scroll position and section layout, intersection entries,
//! color-scheme changes) as JSON messages. [`run`] receives them and routes
//! each one to the matching piece of page state.

use dioxus::prelude::*;
use portfolio_core::{InputEvent, Key, RevealKind, SectionBounds};
use serde::Deserialize;

use crate::context::{ModalDispatch, PageState};

/// Layout of one `section[id]`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SectionSample {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RevealSample {
    Fade,
    Counter,
    Skill,
}

impl From<RevealSample> for RevealKind {
    fn from(sample: RevealSample) -> Self {
        match sample {
            RevealSample::Fade => RevealKind::FadeIn,
            RevealSample::Counter => RevealKind::Counter,
            RevealSample::Skill => RevealKind::SkillBar,
        }
    }
}

/// One message from the page script.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSignal {
    Scroll {
        y: f64,
        width: f64,
        #[serde(default)]
        sections: Vec<SectionSample>,
    },
    Key {
        key: String,
    },
    ColorScheme {
        prefers_light: bool,
    },
    Visible {
        target: String,
        reveal: RevealSample,
        ratio: f64,
    },
}

/// Build the bridge script with reveal thresholds taken from [`RevealKind`].
pub fn bridge_script() -> String {
    format!(
        r#"
const send = (msg) => dioxus.send(msg);

const sampleScroll = () => {{
  const sections = Array.from(document.querySelectorAll('section[id]')).map((s) => ({{
    id: s.id,
    top: s.offsetTop,
    height: s.offsetHeight,
  }}));
  send({{ kind: 'scroll', y: window.scrollY, width: window.innerWidth, sections }});
}};
window.addEventListener('scroll', sampleScroll, {{ passive: true }});
window.addEventListener('resize', sampleScroll, {{ passive: true }});

document.addEventListener('keydown', (e) => send({{ kind: 'key', key: e.key }}));

const scheme = window.matchMedia('(prefers-color-scheme: light)');
send({{ kind: 'color_scheme', prefers_light: scheme.matches }});
scheme.addEventListener('change', (e) => send({{ kind: 'color_scheme', prefers_light: e.matches }}));

const observe = (reveal, threshold) => {{
  const observer = new IntersectionObserver((entries) => {{
    entries.forEach((entry) => {{
      if (!entry.isIntersecting || !entry.target.id) return;
      send({{ kind: 'visible', target: entry.target.id, reveal, ratio: entry.intersectionRatio }});
      if (entry.intersectionRatio >= threshold) observer.unobserve(entry.target);
    }});
  }}, {{ root: null, rootMargin: '0px', threshold }});
  document.querySelectorAll(`[data-reveal="${{reveal}}"]`).forEach((el) => observer.observe(el));
}};
observe('fade', {fade});
observe('counter', {counter});
observe('skill', {skill});

sampleScroll();
await new Promise(() => {{}});
"#,
        fade = RevealKind::FadeIn.threshold(),
        counter = RevealKind::Counter.threshold(),
        skill = RevealKind::SkillBar.threshold(),
    )
}

/// Receive page signals until the webview goes away.
pub async fn run(page: PageState) {
    let mut eval = document::eval(&bridge_script());
    tracing::debug!("Page bridge started");

    loop {
        let raw = match eval.recv::<serde_json::Value>().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("Page bridge closed: {:?}", e);
                break;
            }
        };
        match serde_json::from_value::<PageSignal>(raw) {
            Ok(signal) => apply(page, signal),
            Err(e) => tracing::warn!("Ignoring malformed page signal: {}", e),
        }
    }
}

/// Route one signal to the state it affects.
pub fn apply(mut page: PageState, signal: PageSignal) {
    match signal {
        PageSignal::Scroll { y, width, sections } => {
            let bounds: Vec<SectionBounds> = sections
                .into_iter()
                .map(|s| SectionBounds::new(s.id, s.top, s.height))
                .collect();
            page.scroll.write().update(y, width, &bounds);
        }
        PageSignal::Key { key } => {
            ModalDispatch::new(page.modal, page.router)
                .send(InputEvent::Key(Key::from_key_name(&key)));
        }
        PageSignal::ColorScheme { prefers_light } => {
            if page.theme.write().system_changed(prefers_light) {
                tracing::info!(
                    theme = %page.theme.peek().current(),
                    "Following system color scheme"
                );
            }
        }
        PageSignal::Visible {
            target,
            reveal,
            ratio,
        } => {
            let revealed = page
                .reveals
                .peek()
                .is_revealed(&target);
            if !revealed {
                page.reveals.write().intersect(&target, reveal.into(), ratio);
            }
        }
    }
}

/// Suspend or restore background scrolling.
pub fn set_scroll_lock(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!("document.body.style.overflow = '{}';", overflow));
}

/// Smoothly scroll a section into view.
pub fn scroll_to(section_id: &str) {
    let id = serde_json::to_string(section_id).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        id
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scroll_signal() {
        let signal: PageSignal = serde_json::from_str(
            r#"{"kind":"scroll","y":120.5,"width":1280,"sections":[{"id":"home","top":0,"height":900}]}"#,
        )
        .unwrap();
        assert_eq!(
            signal,
            PageSignal::Scroll {
                y: 120.5,
                width: 1280.0,
                sections: vec![SectionSample {
                    id: "home".into(),
                    top: 0.0,
                    height: 900.0
                }],
            }
        );
    }

    #[test]
    fn parses_key_and_visible_signals() {
        let key: PageSignal = serde_json::from_str(r#"{"kind":"key","key":"Escape"}"#).unwrap();
        assert_eq!(key, PageSignal::Key { key: "Escape".into() });

        let visible: PageSignal = serde_json::from_str(
            r#"{"kind":"visible","target":"skill-swift","reveal":"skill","ratio":0.6}"#,
        )
        .unwrap();
        assert!(matches!(
            visible,
            PageSignal::Visible { reveal: RevealSample::Skill, .. }
        ));
    }

    #[test]
    fn parses_color_scheme() {
        let signal: PageSignal =
            serde_json::from_str(r#"{"kind":"color_scheme","prefers_light":true}"#).unwrap();
        assert_eq!(signal, PageSignal::ColorScheme { prefers_light: true });
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(serde_json::from_str::<PageSignal>(r#"{"kind":"resize"}"#).is_err());
    }

    #[test]
    fn script_embeds_thresholds() {
        let script = bridge_script();
        assert!(script.contains("observe('fade', 0.2)"));
        assert!(script.contains("observe('skill', 0.5)"));
    }
}
