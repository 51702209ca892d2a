use std::f64::consts::PI;

use crate::error::{GeometryError, InputError, Result};
use crate::math::{Point3, TOLERANCE};

/// A solid sphere.
///
/// Validated on construction and immutable afterwards. The volume is cached
/// since every overlap computation needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    volume: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFinite`] if a coordinate or the radius is not
    /// finite, and [`GeometryError::NonPositiveRadius`] if the radius is not
    /// strictly positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !center.iter().all(|c| c.is_finite()) {
            return Err(InputError::NonFinite { what: "sphere center" }.into());
        }
        if !radius.is_finite() {
            return Err(InputError::NonFinite { what: "sphere radius" }.into());
        }
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius).into());
        }

        Ok(Self::new_unchecked(center, radius))
    }

    /// Creates a sphere from raw coordinates, e.g. as handed over by a
    /// foreign-language binding.
    ///
    /// # Errors
    ///
    /// Same as [`Sphere::new`].
    pub fn from_coords(center: [f64; 3], radius: f64) -> Result<Self> {
        Self::new(Point3::from(center), radius)
    }

    /// The unit sphere centered at the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self::new_unchecked(Point3::origin(), 1.0)
    }

    fn new_unchecked(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius,
            volume: (4.0 / 3.0 * PI) * radius * radius * radius,
        }
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the volume `4/3 pi r^3`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the surface area `4 pi r^2`.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        (4.0 * PI) * (self.radius * self.radius)
    }

    /// Whether `point` lies inside the sphere or on its surface, with the
    /// default relative tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        self.contains_within(point, TOLERANCE)
    }

    /// Whether `point` lies inside the sphere or within `tolerance * radius`
    /// of its surface.
    #[must_use]
    pub fn contains_within(&self, point: &Point3, tolerance: f64) -> bool {
        let outer = self.radius * (1.0 + tolerance);
        (self.center - point).norm_squared() <= outer * outer
    }

    /// Whether `point` lies inside the sphere, deeper than
    /// `tolerance * radius` below its surface.
    #[must_use]
    pub fn interior_contains(&self, point: &Point3, tolerance: f64) -> bool {
        let inner = self.radius * (1.0 - tolerance);
        (self.center - point).norm_squared() < inner * inner
    }

    /// Volume of the spherical cap of the given height.
    #[must_use]
    pub fn cap_volume(&self, height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        if height >= 2.0 * self.radius {
            return self.volume;
        }
        (PI / 3.0) * height * height * (3.0 * self.radius - height)
    }

    /// Curved surface area of the spherical cap of the given height.
    #[must_use]
    pub fn cap_surface_area(&self, height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        if height >= 2.0 * self.radius {
            return self.surface_area();
        }
        (2.0 * PI) * self.radius * height
    }

    /// Area of the base disk of the spherical cap of the given height.
    #[must_use]
    pub fn disk_area(&self, height: f64) -> f64 {
        if height <= 0.0 || height >= 2.0 * self.radius {
            return 0.0;
        }
        PI * height * (2.0 * self.radius - height)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::unit()
    }
}
