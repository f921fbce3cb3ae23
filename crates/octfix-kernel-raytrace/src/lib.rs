#![warn(missing_docs)]

//! Ray/box intersection for the octfix kernel.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and direction
//! - [`BoxHit`] - Entry distance, entry face, reflected ray and entered octant
//! - [`ChildLookup`] - Rule used to classify the entry point into an octant
//!
//! # Example
//!
//! ```
//! use octfix_kernel_bbox::Aabb3;
//! use octfix_kernel_math::Vec3;
//! use octfix_kernel_raytrace::Ray;
//!
//! let aabb = Aabb3::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
//! let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
//!
//! let hit = ray.intersect_box(&aabb).unwrap();
//! assert_eq!(hit.distance, 5.0);
//! assert_eq!(hit.reflected.direction, Vec3::new(-1.0, 0.0, 0.0));
//! ```

mod ray;

pub use ray::{hit_distance, Axis, BoxHit, ChildLookup, Ray};
