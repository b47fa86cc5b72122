use image::{Rgba, RgbaImage};

// Play-button icon: blue radial gradient disc with a white triangle
pub fn render(size: u32) -> RgbaImage {
    let s = size as f32;
    let center = s * 0.5;
    let radius = s * 0.45;

    // Triangle sits slightly left so it looks centered
    let corners = [(s * 0.40, s * 0.32), (s * 0.40, s * 0.68), (s * 0.70, s * 0.50)];
    let inside_triangle = |px: f32, py: f32| {
        let side = |(ax, ay): (f32, f32), (bx, by): (f32, f32)| {
            (bx - ax) * (py - ay) - (by - ay) * (px - ax)
        };
        let edges = [
            side(corners[0], corners[1]),
            side(corners[1], corners[2]),
            side(corners[2], corners[0]),
        ];
        edges.iter().all(|&e| e >= 0.0) || edges.iter().all(|&e| e <= 0.0)
    };

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if inside_triangle(px, py) {
            return Rgba([255, 255, 255, 255]);
        }

        let dist = (px - center).hypot(py - center);
        if dist > radius {
            return Rgba([0, 0, 0, 0]);
        }
        // 0 at the center, 1 at the rim
        let t = dist / radius;
        let shade = |inner: f32, outer: f32| (inner + (outer - inner) * t) as u8;
        Rgba([shade(28.0, 10.0), shade(140.0, 60.0), shade(240.0, 120.0), 255])
    })
}
