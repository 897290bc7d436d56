//! State for the floating reading-flow panel: visibility, placement, and the
//! drag gesture that moves it.

/// Viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn minus(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// What a press landed on. Presses on controls never start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Body,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `grab_offset` is pointer minus panel origin at press time.
    Dragging { grab_offset: Point },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    visible: bool,
    /// `None` keeps the default bottom-right anchoring.
    position: Option<Point>,
    drag: DragState,
    /// Pointer of a body press still waiting for the layout origin.
    held: Option<Point>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            visible: true,
            position: None,
            drag: DragState::Idle,
            held: None,
        }
    }
}

impl PanelState {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Dragging, or holding a press whose origin is still being measured.
    pub fn is_engaged(&self) -> bool {
        self.is_dragging() || self.held.is_some()
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.drag = DragState::Idle;
        self.held = None;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Begin a drag. `element_origin` is the panel's current top-left corner
    /// as laid out; an explicit position takes precedence over it.
    /// Returns whether a drag started.
    pub fn press(&mut self, target: HitTarget, pointer: Point, element_origin: Point) -> bool {
        if !self.visible || target == HitTarget::Control {
            return false;
        }
        let origin = self.position.unwrap_or(element_origin);
        self.drag = DragState::Dragging {
            grab_offset: pointer.minus(origin),
        };
        true
    }

    /// Hold a press made while the panel is still anchored and its origin
    /// unknown. Returns whether the press is held.
    pub fn hold(&mut self, target: HitTarget, pointer: Point) -> bool {
        if !self.visible || target == HitTarget::Control {
            return false;
        }
        self.held = Some(pointer);
        true
    }

    /// Start the held drag from the measured layout origin. A release that
    /// arrived first leaves nothing to start.
    pub fn origin_measured(&mut self, element_origin: Point) -> bool {
        match self.held.take() {
            Some(pointer) => self.press(HitTarget::Body, pointer, element_origin),
            None => false,
        }
    }

    /// Returns whether the position changed.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        match self.drag {
            DragState::Dragging { grab_offset } => {
                let next = pointer.minus(grab_offset);
                let changed = self.position != Some(next);
                self.position = Some(next);
                changed
            }
            DragState::Idle => false,
        }
    }

    pub fn release(&mut self) {
        self.drag = DragState::Idle;
        self.held = None;
    }

    pub fn cursor(&self) -> &'static str {
        if self.is_dragging() {
            "grabbing"
        } else {
            "grab"
        }
    }

    /// Inline placement for the fixed-position container.
    pub fn placement_style(&self) -> String {
        let anchor = match self.position {
            None => "bottom: 2rem; right: 2rem; left: auto; top: auto;".to_string(),
            Some(Point { x, y }) => {
                format!("left: {x}px; top: {y}px; bottom: auto; right: auto;")
            }
        };
        format!("{anchor} cursor: {};", self.cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(900.0, 500.0);

    #[test]
    fn starts_visible_and_anchored() {
        let panel = PanelState::default();
        assert!(panel.visible());
        assert_eq!(panel.position(), None);
        assert_eq!(panel.cursor(), "grab");
        assert!(panel.placement_style().contains("bottom: 2rem"));
    }

    #[test]
    fn press_on_control_never_drags() {
        let mut panel = PanelState::default();
        assert!(!panel.press(HitTarget::Control, Point::new(910.0, 510.0), ORIGIN));
        assert!(!panel.pointer_moved(Point::new(400.0, 100.0)));
        assert_eq!(panel.position(), None);
        assert_eq!(panel.drag(), DragState::Idle);
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let mut panel = PanelState::default();
        let pointer = Point::new(930.0, 520.0);
        assert!(panel.press(HitTarget::Body, pointer, ORIGIN));
        assert_eq!(
            panel.drag(),
            DragState::Dragging {
                grab_offset: Point::new(30.0, 20.0)
            }
        );
        assert_eq!(panel.cursor(), "grabbing");

        let (dx, dy) = (-250.0, 75.5);
        assert!(panel.pointer_moved(Point::new(pointer.x + dx, pointer.y + dy)));
        assert_eq!(panel.position(), Some(Point::new(ORIGIN.x + dx, ORIGIN.y + dy)));

        panel.release();
        assert!(!panel.is_dragging());
        assert!(!panel.pointer_moved(Point::new(0.0, 0.0)));
        assert_eq!(panel.position(), Some(Point::new(650.0, 575.5)));
    }

    #[test]
    fn later_drags_start_from_stored_position() {
        let mut panel = PanelState::default();
        panel.press(HitTarget::Body, Point::new(910.0, 510.0), ORIGIN);
        panel.pointer_moved(Point::new(110.0, 60.0));
        panel.release();
        assert_eq!(panel.position(), Some(Point::new(100.0, 50.0)));

        // Layout origin is stale once a position exists.
        panel.press(HitTarget::Body, Point::new(105.0, 55.0), ORIGIN);
        panel.pointer_moved(Point::new(115.0, 65.0));
        assert_eq!(panel.position(), Some(Point::new(110.0, 60.0)));
    }

    #[test]
    fn hide_then_show_keeps_position() {
        let mut panel = PanelState::default();
        panel.press(HitTarget::Body, Point::new(910.0, 510.0), ORIGIN);
        panel.pointer_moved(Point::new(310.0, 210.0));
        panel.release();
        let moved = panel.position();

        panel.hide();
        assert!(!panel.visible());
        panel.show();
        assert!(panel.visible());
        assert_eq!(panel.position(), moved);
        assert!(panel.placement_style().starts_with("left: 300px; top: 200px;"));
    }

    #[test]
    fn hiding_cancels_a_drag() {
        let mut panel = PanelState::default();
        panel.press(HitTarget::Body, Point::new(910.0, 510.0), ORIGIN);
        panel.hide();
        assert!(!panel.is_dragging());
        assert!(!panel.press(HitTarget::Body, Point::new(910.0, 510.0), ORIGIN));
    }

    #[test]
    fn held_press_starts_once_origin_is_measured() {
        let mut panel = PanelState::default();
        assert!(panel.hold(HitTarget::Body, Point::new(930.0, 520.0)));
        assert!(panel.is_engaged());
        assert!(!panel.is_dragging());

        assert!(panel.origin_measured(ORIGIN));
        assert_eq!(
            panel.drag(),
            DragState::Dragging {
                grab_offset: Point::new(30.0, 20.0)
            }
        );
    }

    #[test]
    fn release_before_origin_measured_cancels_the_press() {
        let mut panel = PanelState::default();
        panel.hold(HitTarget::Body, Point::new(930.0, 520.0));
        panel.release();
        assert!(!panel.is_engaged());

        assert!(!panel.origin_measured(ORIGIN));
        assert_eq!(panel.drag(), DragState::Idle);
        assert!(!panel.pointer_moved(Point::new(100.0, 100.0)));
        assert_eq!(panel.position(), None);
    }

    #[test]
    fn controls_are_never_held() {
        let mut panel = PanelState::default();
        assert!(!panel.hold(HitTarget::Control, Point::new(930.0, 520.0)));
        assert!(!panel.origin_measured(ORIGIN));
        assert!(!panel.is_engaged());
    }
}
