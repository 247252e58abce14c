//! HUD text overlay
//!
//! Labels are plain DOM text; the canvas never draws text.

pub const SCORE_BOX_ID: &str = "scoreBox";
pub const BEST_BOX_ID: &str = "bestBox";
pub const STATUS_BOX_ID: &str = "statusBox";
pub const CENTER_TIP_ID: &str = "centerTip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ascend,
    Descend,
    Steady,
    Stopped,
    GameOver,
}

impl Status {
    pub fn for_intent(dir: i8) -> Self {
        match dir.signum() {
            -1 => Status::Ascend,
            1 => Status::Descend,
            _ => Status::Steady,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ascend => "صعود",
            Status::Descend => "نزول",
            Status::Steady => "استقرار",
            Status::Stopped => "توقف",
            Status::GameOver => "انتهت اللعبة — المس للشروع من جديد",
        }
    }
}

pub fn score_label(score: u32) -> String {
    format!("النتيجة: {}", score)
}

pub fn best_label(best: u32) -> String {
    format!("الأفضل: {}", best)
}

/// Where HUD updates go
pub trait HudSink {
    fn set_score(&mut self, score: u32);
    fn set_best(&mut self, best: u32);
    fn set_status(&mut self, status: Status);
    fn set_tip_visible(&mut self, visible: bool);
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    /// HUD backed by the page's overlay elements. Missing elements are skipped.
    pub struct DomHud {
        score: Option<Element>,
        best: Option<Element>,
        status: Option<Element>,
        tip: Option<HtmlElement>,
    }

    impl DomHud {
        pub fn new(document: &Document) -> Self {
            let tip = document
                .get_element_by_id(CENTER_TIP_ID)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            Self {
                score: document.get_element_by_id(SCORE_BOX_ID),
                best: document.get_element_by_id(BEST_BOX_ID),
                status: document.get_element_by_id(STATUS_BOX_ID),
                tip,
            }
        }
    }

    fn set_text(el: &Option<Element>, text: &str) {
        if let Some(el) = el {
            el.set_text_content(Some(text));
        }
    }

    impl HudSink for DomHud {
        fn set_score(&mut self, score: u32) {
            set_text(&self.score, &score_label(score));
        }

        fn set_best(&mut self, best: u32) {
            set_text(&self.best, &best_label(best));
        }

        fn set_status(&mut self, status: Status) {
            set_text(&self.status, status.label());
        }

        fn set_tip_visible(&mut self, visible: bool) {
            if let Some(tip) = &self.tip {
                let display = if visible { "block" } else { "none" };
                if let Err(e) = tip.style().set_property("display", display) {
                    tracing::warn!(?e, "failed to toggle center tip");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(score_label(7), "النتيجة: 7");
        assert_eq!(best_label(0), "الأفضل: 0");
    }

    #[test]
    fn test_status_for_intent() {
        assert_eq!(Status::for_intent(-1), Status::Ascend);
        assert_eq!(Status::for_intent(1), Status::Descend);
        assert_eq!(Status::for_intent(0), Status::Steady);
        assert_eq!(Status::Stopped.label(), "توقف");
    }
}
