//! Scaled asset path candidates.
//!
//! Pre-scaled assets follow the `name@Nx.ext` naming convention used by asset
//! pipelines: `foo@2x.png` for 2x, `foo@15x.png` for 1.5x, `foo@13x.png` for
//! 1.25x (tenths are rounded up). Loaders try candidates in order and stop at
//! the first one that resolves; the last candidate is always the bare path.

use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::scale::ScaleFactor;

/// One candidate produced by [`ScaleFactor::get_scaled_resources`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledResource {
    /// Scale factor the asset at `path` was rendered for.
    pub scale: ScaleFactor,
    /// Asset path including the `@Nx` annotation, or the unmodified path at 1x.
    pub path: String,
}

impl ScaledResource {
    pub fn new(scale: ScaleFactor, path: impl Into<String>) -> Self {
        Self {
            scale,
            path: path.into(),
        }
    }
}

impl fmt::Display for ScaledResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scale, self.path)
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Native,
    Stepping(i32),
    Fallback,
    Done,
}

/// Lazy form of [`ScaleFactor::get_scaled_resources`].
///
/// Yields the native factor first, then whole factors from `ceil(factor)`
/// down to 2, then the unscaled path.
#[derive(Debug, Clone)]
pub struct ScaledResources<'a> {
    scale: ScaleFactor,
    path: &'a str,
    step: Step,
}

impl<'a> ScaledResources<'a> {
    fn new(scale: ScaleFactor, path: &'a str) -> Self {
        Self {
            scale,
            path,
            step: Step::Native,
        }
    }
}

impl Iterator for ScaledResources<'_> {
    type Item = ScaledResource;

    fn next(&mut self) -> Option<ScaledResource> {
        let factor = self.scale.factor();
        loop {
            match self.step {
                Step::Native => {
                    if factor == 1.0 {
                        self.step = Step::Fallback;
                        continue;
                    }
                    self.step = Step::Stepping(factor.ceil() as i32);
                    return Some(ScaledResource::new(self.scale, compute_path(self.path, factor)));
                }
                Step::Stepping(whole) if whole > 1 => {
                    self.step = Step::Stepping(whole - 1);
                    let rscale = whole as f32;
                    // Exact comparison: a factor of 2.0 skips the whole step 2,
                    // 1.9999999 does not.
                    if rscale != factor {
                        return Some(ScaledResource::new(
                            ScaleFactor::new(rscale),
                            compute_path(self.path, rscale),
                        ));
                    }
                }
                Step::Stepping(_) => self.step = Step::Fallback,
                Step::Fallback => {
                    self.step = Step::Done;
                    return Some(ScaledResource::new(ScaleFactor::ONE, self.path));
                }
                Step::Done => return None,
            }
        }
    }
}

impl FusedIterator for ScaledResources<'_> {}

impl ScaleFactor {
    /// Ordered candidates to try when loading the asset at `path`.
    ///
    /// A native factor of 2 yields `2, 1`; 4 yields `4, 3, 2, 1`; fractional
    /// factors are tried as-is, then rounded up and stepped down, so 2.5
    /// yields `2.5, 3, 2, 1`.
    pub fn get_scaled_resources(&self, path: &str) -> Vec<ScaledResource> {
        let rsrcs: Vec<ScaledResource> = self.scaled_resources(path).collect();
        trace!(
            "scaled resources for {} at {}: {} candidates",
            path,
            self,
            rsrcs.len()
        );
        rsrcs
    }

    /// Iterator over the same candidates as [`ScaleFactor::get_scaled_resources`].
    pub fn scaled_resources<'a>(&self, path: &'a str) -> ScaledResources<'a> {
        ScaledResources::new(*self, path)
    }
}

/// Insert the `@Nx` annotation before the extension of `path`.
pub(crate) fn compute_path(path: &str, scale: f32) -> String {
    if scale <= 1.0 {
        return path.to_owned();
    }
    let mut suffix = (scale * 10.0).ceil() as i32;
    if suffix % 10 == 0 {
        suffix /= 10;
    }
    match path.rfind('.') {
        Some(dot) => format!("{}@{}x{}", &path[..dot], suffix, &path[dot..]),
        // no extension to annotate
        None => path.to_owned(),
    }
}
