//! Canvas surface: the loaded template and the display frame it defines.
//!
//! Loading is all-or-nothing. `Template::from_source` validates the decoded
//! dimensions and derives display size and scale in one step; `Surface::load`
//! only replaces the current template once that succeeds.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::collab::TemplateSource;
use crate::consts::{DISPLAY_MAX_HEIGHT, DISPLAY_MAX_WIDTH};
use crate::error::LoadError;
use crate::transform::{Scale, Size, fit_to_bounds};

/// The fit-to-bounds limits for the on-screen template.
#[must_use]
pub fn display_bounds() -> Size {
    Size::new(DISPLAY_MAX_WIDTH, DISPLAY_MAX_HEIGHT)
}

/// A loaded template and its coordinate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Identifier the rendering service knows the template by.
    pub reference: String,
    pub image_url: String,
    /// Full-resolution pixel size.
    pub original: Size,
    /// Size of the fitted on-screen preview; also the box container.
    pub display: Size,
    /// `original / display` per axis.
    pub scale: Scale,
}

impl Template {
    /// Establish a frame for a decoded template image.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EmptyImage`] if either dimension is zero.
    pub fn from_source(source: &TemplateSource) -> Result<Self, LoadError> {
        let original = Size::new(f64::from(source.width), f64::from(source.height));
        if !original.is_drawable() {
            return Err(LoadError::EmptyImage { width: source.width, height: source.height });
        }
        let display = fit_to_bounds(original, display_bounds());
        Ok(Self {
            reference: source.reference.clone(),
            image_url: source.image_url.clone(),
            original,
            display,
            scale: Scale::between(original, display),
        })
    }
}

/// Owner of the current template, if any.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    template: Option<Template>,
}

impl Surface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current template. On error the previous template stays.
    ///
    /// # Errors
    ///
    /// Propagates [`Template::from_source`] failures.
    pub fn load(&mut self, source: &TemplateSource) -> Result<&Template, LoadError> {
        let template = Template::from_source(source)?;
        Ok(&*self.template.insert(template))
    }

    #[must_use]
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// The container boxes are clamped into. Zero-sized before any template
    /// is loaded, which pins every box to the origin.
    #[must_use]
    pub fn container(&self) -> Size {
        self.template.as_ref().map_or_else(Size::default, |t| t.display)
    }
}
