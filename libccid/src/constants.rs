// libccid/src/constants.rs
//! CCID class constants (USB CCID Rev 1.1, section 6).

/// Every CCID bulk message starts with a 10-byte header.
pub const CCID_HEADER_LEN: usize = 10;

/// USB interface class code for smart-card readers.
pub const CCID_INTERFACE_CLASS: u8 = 0x0B;

/// Single-slot readers only.
pub const CCID_SLOT: u8 = 0;

// PC_to_RDR messages
pub const PC_TO_RDR_SET_PARAMETERS: u8 = 0x61;
pub const PC_TO_RDR_ICC_POWER_ON: u8 = 0x62;
pub const PC_TO_RDR_ICC_POWER_OFF: u8 = 0x63;
pub const PC_TO_RDR_GET_SLOT_STATUS: u8 = 0x65;
pub const PC_TO_RDR_XFR_BLOCK: u8 = 0x6F;

// RDR_to_PC messages
pub const RDR_TO_PC_DATA_BLOCK: u8 = 0x80;
pub const RDR_TO_PC_SLOT_STATUS: u8 = 0x81;
pub const RDR_TO_PC_PARAMETERS: u8 = 0x82;

/// bmICCStatus occupies bits 0-1 of the status byte.
pub const ICC_STATUS_MASK: u8 = 0x03;
/// bmCommandStatus occupies bits 6-7 of the status byte.
pub const COMMAND_STATUS_MASK: u8 = 0xC0;
pub const COMMAND_STATUS_SHIFT: u8 = 6;

/// abProtocolDataStructure sizes for SetParameters.
pub const T0_PARAMETERS_LEN: usize = 5;
pub const T1_PARAMETERS_LEN: usize = 7;

/// ISO 7816-3 bounds on ATR length (TS included).
pub const ATR_MIN_LEN: usize = 2;
pub const ATR_MAX_LEN: usize = 33;

/// Largest payload the 32-bit dwLength field can describe.
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Short APDU upper bound: CLA INS P1 P2 + Lc + 255 data + Le.
pub const SHORT_APDU_MAX_LEN: usize = 4 + 1 + 255 + 1;

// bError values reported with a failed command status
pub const CMD_ABORTED: u8 = 0xFF;
/// No ATR from the card within the timeout.
pub const ICC_MUTE: u8 = 0xFE;
pub const XFR_PARITY_ERROR: u8 = 0xFD;
pub const XFR_OVERRUN: u8 = 0xFC;
/// Reader hardware failure.
pub const HW_ERROR: u8 = 0xFB;
pub const BAD_ATR_TS: u8 = 0xF8;
pub const BAD_ATR_TCK: u8 = 0xF7;
pub const ICC_PROTOCOL_NOT_SUPPORTED: u8 = 0xF6;
pub const ICC_CLASS_NOT_SUPPORTED: u8 = 0xF5;
pub const PROCEDURE_BYTE_CONFLICT: u8 = 0xF4;
pub const DEACTIVATED_PROTOCOL: u8 = 0xF3;
pub const BUSY_WITH_AUTO_SEQUENCE: u8 = 0xF2;
pub const PIN_TIMEOUT: u8 = 0xF0;
pub const PIN_CANCELLED: u8 = 0xEF;
pub const CMD_SLOT_BUSY: u8 = 0xE0;
pub const CMD_NOT_SUPPORTED: u8 = 0x00;

/// Human-readable name of a bError value. Values 0x01..=0x7F name the
/// offending parameter offset in the command message.
pub fn error_code_name(code: u8) -> &'static str {
    match code {
        CMD_ABORTED => "CMD_ABORTED",
        ICC_MUTE => "ICC_MUTE",
        XFR_PARITY_ERROR => "XFR_PARITY_ERROR",
        XFR_OVERRUN => "XFR_OVERRUN",
        HW_ERROR => "HW_ERROR",
        BAD_ATR_TS => "BAD_ATR_TS",
        BAD_ATR_TCK => "BAD_ATR_TCK",
        ICC_PROTOCOL_NOT_SUPPORTED => "ICC_PROTOCOL_NOT_SUPPORTED",
        ICC_CLASS_NOT_SUPPORTED => "ICC_CLASS_NOT_SUPPORTED",
        PROCEDURE_BYTE_CONFLICT => "PROCEDURE_BYTE_CONFLICT",
        DEACTIVATED_PROTOCOL => "DEACTIVATED_PROTOCOL",
        BUSY_WITH_AUTO_SEQUENCE => "BUSY_WITH_AUTO_SEQUENCE",
        PIN_TIMEOUT => "PIN_TIMEOUT",
        PIN_CANCELLED => "PIN_CANCELLED",
        CMD_SLOT_BUSY => "CMD_SLOT_BUSY",
        CMD_NOT_SUPPORTED => "CMD_NOT_SUPPORTED",
        0x01..=0x7F => "bad parameter offset",
        _ => "reserved",
    }
}
