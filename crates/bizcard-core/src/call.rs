//! Call modal: shows the phone number with copy and dial actions on screens
//! where `tel:` links are not useful.

use crate::coordinator::OverlayId;
use crate::overlay::OverlayConfig;

pub const CALL_OVERLAY: OverlayId = OverlayId::new("call");

pub const ID_MODAL: &str = "callModal";
pub const ID_PANEL: &str = "callModalPanel";
pub const ID_CLOSE: &str = "callModalClose";
pub const ID_COPY: &str = "callModalCopy";
pub const ID_DIAL: &str = "callModalDial";
/// Call button on the card; receives focus when nothing else can
pub const ID_TRIGGER: &str = "callButton";

pub fn overlay_config() -> OverlayConfig {
    OverlayConfig::new(ID_MODAL)
        .with_panel(ID_PANEL)
        .with_close_control(ID_CLOSE)
        .with_trigger(ID_TRIGGER)
        .with_fallback_focus(ID_TRIGGER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementId;

    #[test]
    fn traps_focus_in_panel_and_returns_to_call_button() {
        let config = overlay_config();
        assert_eq!(config.focus_scope(), &ElementId::from(ID_PANEL));
        assert_eq!(config.close_control, Some(ElementId::from(ID_CLOSE)));
        assert_eq!(config.triggers, vec![ElementId::from(ID_TRIGGER)]);
        assert_eq!(config.fallback_focus, Some(ElementId::from(ID_TRIGGER)));
    }
}
