//! Auto-advancing selection shared by the image carousel and the formula
//! explorer: a cursor over `len` items that ticks forward unless paused.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
    paused: bool,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Timer tick; ignored while paused.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.len == 0 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Horizontal track offset for a sliding strip, in percent.
    pub fn track_offset(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_around() {
        let mut rotation = Rotation::new(3);
        rotation.tick();
        rotation.tick();
        assert_eq!(rotation.index(), 2);
        rotation.tick();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn paused_rotation_holds_still() {
        let mut rotation = Rotation::new(5);
        rotation.pause();
        assert!(!rotation.tick());
        assert_eq!(rotation.index(), 0);
        rotation.resume();
        assert!(rotation.tick());
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut rotation = Rotation::new(5);
        rotation.select(3);
        assert_eq!(rotation.track_offset(), "translateX(-300%)");
        rotation.select(9);
        assert_eq!(rotation.index(), 3);
        rotation.reset();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn empty_rotation_never_moves() {
        let mut rotation = Rotation::new(0);
        assert!(rotation.is_empty());
        assert!(!rotation.tick());
    }
}
