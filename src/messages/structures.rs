//! HL7 v2.5 message structures built from the segment layouts.

use super::segments::*;
use super::tables::{GroupDef, SlotDef};

pub static ADT_A01_PROCEDURE: GroupDef = GroupDef {
    name: "ADT_A01_PROCEDURE",
    slots: &[
        SlotDef::segment(&PR1).required(),
        SlotDef::segment(&ROL).repeating(),
    ],
};

pub static ADT_A01_INSURANCE: GroupDef = GroupDef {
    name: "ADT_A01_INSURANCE",
    slots: &[
        SlotDef::segment(&IN1).required(),
        SlotDef::segment(&ROL).repeating(),
    ],
};

/// ADT^A01 Admit/Visit Notification. The second ROL slot is exposed as `ROL2`.
pub static ADT_A01: GroupDef = GroupDef {
    name: "ADT_A01",
    slots: &[
        SlotDef::segment(&MSH).required(),
        SlotDef::segment(&SFT).repeating(),
        SlotDef::segment(&EVN).required(),
        SlotDef::segment(&PID).required(),
        SlotDef::segment(&PD1),
        SlotDef::segment(&ROL).repeating(),
        SlotDef::segment(&NK1).repeating(),
        SlotDef::segment(&PV1).required(),
        SlotDef::segment(&ROL).repeating(),
        SlotDef::segment(&OBX).repeating(),
        SlotDef::segment(&AL1).repeating(),
        SlotDef::segment(&DG1).repeating(),
        SlotDef::group("PROCEDURE", &ADT_A01_PROCEDURE).repeating(),
        SlotDef::group("INSURANCE", &ADT_A01_INSURANCE).repeating(),
    ],
};

pub static ORU_R01_VISIT: GroupDef = GroupDef {
    name: "ORU_R01_VISIT",
    slots: &[SlotDef::segment(&PV1).required()],
};

pub static ORU_R01_PATIENT: GroupDef = GroupDef {
    name: "ORU_R01_PATIENT",
    slots: &[
        SlotDef::segment(&PID).required(),
        SlotDef::segment(&PD1),
        SlotDef::segment(&NTE).repeating(),
        SlotDef::segment(&NK1).repeating(),
        SlotDef::group("VISIT", &ORU_R01_VISIT),
    ],
};

pub static ORU_R01_TIMING_QTY: GroupDef = GroupDef {
    name: "ORU_R01_TIMING_QTY",
    slots: &[SlotDef::segment(&TQ1).required()],
};

pub static ORU_R01_OBSERVATION: GroupDef = GroupDef {
    name: "ORU_R01_OBSERVATION",
    slots: &[
        SlotDef::segment(&OBX).required(),
        SlotDef::segment(&NTE).repeating(),
    ],
};

pub static ORU_R01_ORDER_OBSERVATION: GroupDef = GroupDef {
    name: "ORU_R01_ORDER_OBSERVATION",
    slots: &[
        SlotDef::segment(&ORC),
        SlotDef::segment(&OBR).required(),
        SlotDef::segment(&NTE).repeating(),
        SlotDef::group("TIMING_QTY", &ORU_R01_TIMING_QTY).repeating(),
        SlotDef::group("OBSERVATION", &ORU_R01_OBSERVATION).repeating(),
    ],
};

pub static ORU_R01_PATIENT_RESULT: GroupDef = GroupDef {
    name: "ORU_R01_PATIENT_RESULT",
    slots: &[
        SlotDef::group("PATIENT", &ORU_R01_PATIENT),
        SlotDef::group("ORDER_OBSERVATION", &ORU_R01_ORDER_OBSERVATION)
            .required()
            .repeating(),
    ],
};

/// ORU^R01 Unsolicited Observation Message.
pub static ORU_R01: GroupDef = GroupDef {
    name: "ORU_R01",
    slots: &[
        SlotDef::segment(&MSH).required(),
        SlotDef::segment(&SFT).repeating(),
        SlotDef::group("PATIENT_RESULT", &ORU_R01_PATIENT_RESULT)
            .required()
            .repeating(),
    ],
};

/// General acknowledgment.
pub static ACK: GroupDef = GroupDef {
    name: "ACK",
    slots: &[
        SlotDef::segment(&MSH).required(),
        SlotDef::segment(&SFT).repeating(),
        SlotDef::segment(&MSA).required(),
        SlotDef::segment(&ERR).repeating(),
    ],
};

/// Top-level message structures registered by the standard registry.
pub static ALL_STRUCTURES: &[&GroupDef] = &[&ADT_A01, &ORU_R01, &ACK];
