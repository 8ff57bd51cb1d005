pub mod constants;  // tabelas de calibração
pub mod power;      // ln/exp em ponto fixo
pub mod params;
pub mod bonding;    // price / cap / supply
pub mod chart;

pub use bonding::{get_cap, get_price, get_supply};
pub use params::CurveParameters;
pub use power::{power, PowerResult};
