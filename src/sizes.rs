/// One base size of a macOS iconset together with its 1x and 2x pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub label: &'static str,
    pub variants: [(u32, u32); 2],
}

/// Base sizes from smallest to largest, 1x before 2x.
pub const ICON_SIZES: &[IconSize] = &[
    IconSize { label: "16x16", variants: [(16, 16), (32, 32)] },
    IconSize { label: "32x32", variants: [(32, 32), (64, 64)] },
    IconSize { label: "128x128", variants: [(128, 128), (256, 256)] },
    IconSize { label: "256x256", variants: [(256, 256), (512, 512)] },
    IconSize { label: "512x512", variants: [(512, 512), (1024, 1024)] },
];

/// A single file to render: base size label plus exact pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl IconTarget {
    pub fn file_name(&self) -> String {
        format!("icon_{}_{}x{}.png", self.label, self.width, self.height)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Flattened size table in render order.
pub fn targets() -> impl Iterator<Item = IconTarget> {
    ICON_SIZES.iter().flat_map(|size| {
        size.variants.iter().map(move |&(width, height)| IconTarget {
            label: size.label,
            width,
            height,
        })
    })
}
