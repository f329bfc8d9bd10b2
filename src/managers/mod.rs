// MiniBrowser state managers

pub mod tab_manager;
