//! Static page generation.
//!
//! Each category gets one self-contained dashboard page assembled from
//! the stored fragments. Output layout, relative to the working
//! directory:
//!
//! ```text
//! ./
//! ├── twn/index.html
//! ├── twe/index.html
//! ├── tww/index.html
//! ├── bali/index.html
//! └── cwm_ljp.gif
//! ```
//!
//! The stylesheets and scripts the pages reference (`/css`, `/js`,
//! `/images`) are deployed separately; [`theme`] only embeds their paths.

pub mod compose;
pub mod theme;
