//! The deployed register catalogs.
//!
//! These tables mirror the firmware on the wire and change only in lockstep
//! with it. Ids must stay strictly ascending within each table; the map
//! constructor enforces that at compile time.

use crate::map::{RegisterEntry, RegisterMap};
use crate::types::{Bitfield, RegisterType};

pub static SLAVE_STATUS: Bitfield = Bitfield::new(
    "slave_status",
    &[
        "alive",
        "arm_ready",
        "arm_active",
        "coils_nonzero",
        "shutdown_from_fault",
    ],
);

pub static SLAVE_FAULTS: Bitfield = Bitfield::new(
    "slave_faults",
    &[
        "temp_fault",
        "current_spike_fault",
        "vsense_fault",
        "invalid_value_fault",
        "communication_fault",
    ],
);

pub static GLOBAL_STATE: Bitfield =
    Bitfield::new("global_state", &["global_arm", "global_fault_clear"]);

pub static SLAVE_SETTINGS: Bitfield =
    Bitfield::new("slave_settings", &["identify", "local_fault_clear"]);

pub static HV_SWITCH_STATUS: Bitfield = Bitfield::new(
    "hv_switch_status",
    &[
        "hv_relay_on",
        "precharge_ssr_on",
        "shdn_12_on",
        "fault_12",
        "hv_shutdown_from_fault",
        "hv_ready",
    ],
);

pub static USB_INTERFACE_STATUS: Bitfield =
    Bitfield::new("usb_interface_status", &["vendor_active", "cdc_active"]);

/// Fourteen flags, so this one spans two payload bytes.
pub static POWER_SYSTEM_FAULTS: Bitfield = Bitfield::new(
    "power_system_faults",
    &[
        "ov_5v",
        "uv_5v",
        "oc_5v",
        "ov_12v",
        "uv_12v",
        "oc_12v",
        "ov_hv",
        "uv_hv",
        "oc_hv",
        "efuse_12v_fault",
        "master_overtemp",
        "precharge_fault",
        "slave_fault",
        "communication_fault",
    ],
);

const fn entry(id: u8, name: &'static str, ty: RegisterType) -> (u8, RegisterEntry) {
    (id, RegisterEntry { name, ty })
}

/// Catalog for coil-driver tile nodes.
pub static TILE: RegisterMap = RegisterMap::new(
    "tile",
    &[
        entry(0x04, "slave_status", RegisterType::Bits(&SLAVE_STATUS)),
        entry(0x05, "slave_faults", RegisterType::Bits(&SLAVE_FAULTS)),
        entry(0x06, "global_state", RegisterType::Bits(&GLOBAL_STATE)),
        entry(0x07, "slave_settings", RegisterType::Bits(&SLAVE_SETTINGS)),
        entry(0x08, "v_sense_5", RegisterType::F32),
        entry(0x09, "v_sense_12", RegisterType::F32),
        entry(0x0a, "v_sense_hv", RegisterType::F32),
        entry(0x0b, "mcu_temp", RegisterType::U16),
        entry(0x0c, "adj_west_addr", RegisterType::U8),
        entry(0x0d, "adj_north_addr", RegisterType::U8),
        entry(0x0e, "adj_east_addr", RegisterType::U8),
        entry(0x0f, "adj_south_addr", RegisterType::U8),
        entry(0x10, "coil_1_setpoint", RegisterType::U16),
        entry(0x11, "coil_2_setpoint", RegisterType::U16),
        entry(0x12, "coil_3_setpoint", RegisterType::U16),
        entry(0x13, "coil_4_setpoint", RegisterType::U16),
        entry(0x14, "coil_5_setpoint", RegisterType::U16),
        entry(0x15, "coil_6_setpoint", RegisterType::U16),
        entry(0x16, "coil_7_setpoint", RegisterType::U16),
        entry(0x17, "coil_8_setpoint", RegisterType::U16),
        entry(0x18, "coil_9_setpoint", RegisterType::U16),
        entry(0x20, "coil_1_current_reading", RegisterType::U16),
        entry(0x21, "coil_2_current_reading", RegisterType::U16),
        entry(0x22, "coil_3_current_reading", RegisterType::U16),
        entry(0x23, "coil_4_current_reading", RegisterType::U16),
        entry(0x24, "coil_5_current_reading", RegisterType::U16),
        entry(0x25, "coil_6_current_reading", RegisterType::U16),
        entry(0x26, "coil_7_current_reading", RegisterType::U16),
        entry(0x27, "coil_8_current_reading", RegisterType::U16),
        entry(0x28, "coil_9_current_reading", RegisterType::U16),
        entry(0x30, "coil_1_temp", RegisterType::I16),
        entry(0x31, "coil_2_temp", RegisterType::I16),
        entry(0x32, "coil_3_temp", RegisterType::I16),
        entry(0x33, "coil_4_temp", RegisterType::I16),
        entry(0x34, "coil_5_temp", RegisterType::I16),
        entry(0x35, "coil_6_temp", RegisterType::I16),
        entry(0x36, "coil_7_temp", RegisterType::I16),
        entry(0x37, "coil_8_temp", RegisterType::I16),
        entry(0x38, "coil_9_temp", RegisterType::I16),
    ],
);

/// Catalog for the master power controller.
pub static MASTER: RegisterMap = RegisterMap::new(
    "master",
    &[
        entry(
            0x10,
            "power_switch_status",
            RegisterType::Bits(&HV_SWITCH_STATUS),
        ),
        entry(
            0x11,
            "power_system_faults",
            RegisterType::Bits(&POWER_SYSTEM_FAULTS),
        ),
        entry(
            0x12,
            "usb_interface_status",
            RegisterType::Bits(&USB_INTERFACE_STATUS),
        ),
        entry(0x13, "global_state", RegisterType::Bits(&GLOBAL_STATE)),
        entry(0x20, "hv_active", RegisterType::U8),
        entry(0x21, "clear_faults_requested", RegisterType::U8),
        entry(0x30, "mcu_temp", RegisterType::I16),
        entry(0x31, "v_sense_5", RegisterType::F32),
        entry(0x32, "v_sense_12_in", RegisterType::F32),
        entry(0x33, "v_sense_12", RegisterType::F32),
        entry(0x34, "v_sense_hv_in", RegisterType::F32),
        entry(0x35, "v_sense_hv", RegisterType::F32),
        entry(0x36, "i_sense_5", RegisterType::F32),
        entry(0x37, "i_sense_12", RegisterType::F32),
        entry(0x38, "i_sense_hv", RegisterType::F32),
    ],
);
