//! Block-level kinds that own their syntax, mirroring `inline::kinds`.

pub mod bullet;

pub use bullet::Bullet;
