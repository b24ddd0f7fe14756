/// Flat, row-major 2d buffer.
#[derive(Clone, Debug)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_pixel() {
        let film = Vec2D::new(3, 2, 7u8);
        assert_eq!(film.buffer, vec![7; 6]);
        assert_eq!((film.width, film.height), (3, 2));
    }
}
