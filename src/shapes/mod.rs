/// Trident skeleton, hash and mask compositing.
pub mod trident;

/// Flag backgrounds: regular, swallowtail and past officer fields.
pub mod field;

/// Anchor, star, lighthouse, binoculars and trumpet outlines.
pub mod icons;

pub mod pennant;

pub mod ensign;

pub mod us_flag;
