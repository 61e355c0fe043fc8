use std::fmt;

/// How the input points are interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointSource {
    /// Every point is a pixel of unit weight.
    Pixels,
    /// The points are the vertices of a closed polygon whose enclosed area is measured.
    Contour
}

impl fmt::Display for PointSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PointSource::Pixels => write!(f, "pixels"),
            PointSource::Contour => write!(f, "contour")
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DescriptorParameters {
    pub source: PointSource,
    pub print: bool
}

impl Default for DescriptorParameters {
    fn default() -> DescriptorParameters {
        DescriptorParameters { source: PointSource::Pixels, print: false }
    }
}

impl fmt::Display for DescriptorParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut display = String::from(format!("source_{}", self.source));
        if self.print {
            display.push_str("_print");
        }
        write!(f, "{}", display)
    }
}
