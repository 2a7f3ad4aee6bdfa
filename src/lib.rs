//! Matriz: generic dense matrix algebra in pure Rust.
//!
//! Matriz provides a single core container, [`primitives::Matrix`] — a dense
//! row-major 2D matrix generic over any element type implementing
//! [`primitives::Scalar`] — together with checked arithmetic, operator
//! overloads, and a typed error for every failure mode.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.get(0, 0), 6.0);
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product, Matrix::from_vec(2, 2, vec![19.0, 22.0, 43.0, 50.0]).unwrap());
//! ```
//!
//! # Complex matrices
//!
//! [`Matrix::trans`](primitives::Matrix::trans) conjugates elements while
//! transposing, so complex matrices get the Hermitian transpose and real
//! matrices the plain one:
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_vec(2, 2, vec![
//!     Complex::new(1.0, 0.0), Complex::new(2.0, 3.0),
//!     Complex::new(4.0, -1.0), Complex::new(5.0, 0.0),
//! ]).unwrap();
//!
//! let h = m.trans().unwrap();
//! assert_eq!(h.get(0, 1), Complex::new(4.0, 1.0));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix type and the Scalar element trait
//! - [`error`]: Typed errors for every failing operation
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
