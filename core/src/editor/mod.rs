pub mod scale;
pub mod session;
pub mod shapes;

pub use scale::{DisplayScale, MAX_DISPLAY_WIDTH};
pub use session::EditorSession;
pub use shapes::{CanvasPayload, CanvasShape};
