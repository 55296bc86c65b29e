//! Request parameters and resource descriptions.

mod block_device;
mod capacity_reservation;
mod common;
mod create;
mod describe;
mod fleet;
mod image;
mod instance;
mod instance_type_info;
mod launch_template;
mod reserved_instances;
mod run_instances;
mod vpn_tunnel_options;

pub use block_device::*;
pub use capacity_reservation::*;
pub use common::*;
pub use create::*;
pub use describe::*;
pub use fleet::*;
pub use image::*;
pub use instance::*;
pub use instance_type_info::*;
pub use launch_template::*;
pub use reserved_instances::*;
pub use run_instances::*;
pub use vpn_tunnel_options::*;
