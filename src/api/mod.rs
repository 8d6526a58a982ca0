pub mod color;
pub mod palette;
pub mod params;
pub mod session;

pub use color::{__path_handle_color, __path_handle_contrast, __path_handle_simulate};
pub use color::{handle_color, handle_contrast, handle_simulate};
pub use palette::{__path_handle_palette, __path_handle_palette_export};
pub use palette::{handle_palette, handle_palette_export};
pub use params::{parse_color, RgbBody};
pub use session::{
    __path_handle_clear_selection, __path_handle_create_session, __path_handle_delete_session,
    __path_handle_get_session, __path_handle_hover, __path_handle_reset, __path_handle_select,
    __path_handle_select_history,
};
pub use session::{
    handle_clear_selection, handle_create_session, handle_delete_session, handle_get_session,
    handle_hover, handle_reset, handle_select, handle_select_history,
};
