use serde::{Deserialize, Serialize};

/// A width/height pair. The area is computed on every call, so changing a
/// side changes the next `area()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert_eq!(Rectangle::new(10.0, 20.0).area(), 200.0);
    }

    #[test]
    fn test_area_tracks_mutation() {
        let mut rect = Rectangle::new(10.0, 20.0);
        rect.width = 5.0;
        assert_eq!(rect.area(), 100.0);
    }
}
