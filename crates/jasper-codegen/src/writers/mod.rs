//! Specialized contributors

mod expr;
mod field;
mod jsx;
mod method;

pub use expr::ExprWriter;
pub use field::FieldWriter;
pub use jsx::JsxWriter;
pub use method::OverloadWriter;
