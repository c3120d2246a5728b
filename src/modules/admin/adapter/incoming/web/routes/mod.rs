mod login;
mod session;

pub use login::{login_admin_handler, __path_login_admin_handler, LoginAdminRequestDto, LoginAdminResponseDto};
pub use session::{admin_session_handler, __path_admin_session_handler, AdminSessionResponse};
