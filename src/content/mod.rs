//! Curriculum content. One module per curriculum section plus the shortlist
//! track; modules hold literals only.

pub mod section1;
pub mod section2;
pub mod section3;
pub mod section4;
pub mod section5;
pub mod section6;
pub mod section7;
pub mod section8;
pub mod shortlist;

pub use section1::CSHARP_FUNDAMENTALS;
pub use section2::CSHARP_OOP;
pub use section3::CSHARP_COLLECTIONS;
pub use section4::CSHARP_ASYNC_WEB;
pub use section5::TYPESCRIPT_FUNDAMENTALS;
pub use section6::TYPESCRIPT_ADVANCED_TYPES;
pub use section7::REACT_TYPESCRIPT;
pub use section8::FULL_STACK_INTEGRATION;
