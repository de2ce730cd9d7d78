//! Server endpoints, relative to `Config::base_url`.
//!
//! Paths carry no leading `/` so that a base url with a path prefix
//! (`http://host/rh/`) keeps its prefix when joined.

// Vacation form
pub const FIND_EMPLOYEE: &str = "buscar_funcionario";
pub const CHECK_BOOKING: &str = "verificar_agendamento";
pub const LIST_BOOKINGS: &str = "listar_agendamentos";
pub const SUBMIT_BOOKING: &str = "agendar_ferias";
pub const ALTER_BOOKING: &str = "alterar_agendamento";
pub const CANCEL_BOOKING: &str = "cancelar_agendamento";
pub const REQUEST_APPROVAL: &str = "solicitar_aprovacao";

// Account forms
pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const CHANGE_PASSWORD: &str = "trocar_senha";

// Dashboard
pub const DASHBOARD_DATA: &str = "dashboard_data";
pub const RESOLVE_APPROVAL: &str = "aprovar_pedido";
pub const DELETE_BOOKINGS: &str = "excluir_agendamentos";

/// Query parameter carrying the badge on lookups
pub const BADGE_PARAM: &str = "chapa";
