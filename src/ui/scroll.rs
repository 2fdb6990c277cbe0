/// Page anchors and the scroll-on-navigation observer
///
/// The page is one vertical scrollable. The hero has a fixed height so the
/// catalog anchor sits at a known offset; services, contact and footer have
/// fixed heights at the end of the page, so their offsets are measured from
/// the content height reported by the last scroll event.

use std::cell::Cell;
use std::rc::Rc;

use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset, Viewport};
use iced::Task;

use crate::state::navigation::{View, ViewChanged, ViewObserver};
use crate::Message;

pub const HERO_HEIGHT: f32 = 560.0;
pub const SERVICES_HEIGHT: f32 = 420.0;
pub const CONTACT_HEIGHT: f32 = 420.0;
pub const FOOTER_HEIGHT: f32 = 80.0;

/// Named page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Hero,
    Catalog,
    Services,
    Contact,
}

pub fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Vertical offset of an anchor, given the page's content height
fn offset(anchor: Anchor, content_height: f32) -> f32 {
    let y = match anchor {
        Anchor::Hero => 0.0,
        Anchor::Catalog => HERO_HEIGHT,
        Anchor::Services => content_height - SERVICES_HEIGHT - CONTACT_HEIGHT - FOOTER_HEIGHT,
        Anchor::Contact => content_height - CONTACT_HEIGHT - FOOTER_HEIGHT,
    };
    y.max(0.0)
}

/// Resolved scroll position for an anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Start,
    End,
    Offset(f32),
}

/// Where `anchor` sits. `None` when that depends on a content height no
/// scroll event has reported yet.
pub fn target(anchor: Anchor, viewport: Option<&Viewport>) -> Option<Target> {
    match (anchor, viewport) {
        (Anchor::Hero, _) => Some(Target::Start),
        (Anchor::Catalog, _) => Some(Target::Offset(offset(anchor, 0.0))),
        (_, Some(viewport)) => Some(Target::Offset(offset(
            anchor,
            viewport.content_bounds().height,
        ))),
        // Contact and footer fit in one screen at the end of the page
        (Anchor::Contact, None) => Some(Target::End),
        (Anchor::Services, None) => None,
    }
}

/// Task scrolling the page to `target`
pub fn scroll_to(target: Target) -> Task<Message> {
    match target {
        Target::Start => scrollable::snap_to(page_id(), RelativeOffset::START),
        Target::End => scrollable::snap_to(page_id(), RelativeOffset::END),
        Target::Offset(y) => scrollable::scroll_to(page_id(), AbsoluteOffset { x: 0.0, y }),
    }
}

/// Requests a catalog scroll whenever navigation drills down
#[derive(Debug, Clone, Default)]
pub struct ScrollToCatalog {
    pending: Rc<Cell<bool>>,
}

impl ScrollToCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}

impl ViewObserver for ScrollToCatalog {
    fn view_changed(&mut self, event: ViewChanged) {
        if matches!(event.to, View::Models | View::Detail) {
            self.pending.set(true);
        }
    }
}
