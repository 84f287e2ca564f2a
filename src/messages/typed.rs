//! Typed wrappers for the built-in message structures.
//!
//! Every accessor is a thin layer over the generic [`Group`] operations and
//! follows the same creation and repetition rules.

use crate::config::StructureConfig;
use crate::error::Result;
use crate::structure::{Group, Message, Segment};

/// Access to the group underneath a typed wrapper.
pub trait GroupView {
    fn group(&self) -> &Group;
    fn group_mut(&mut self) -> &mut Group;
}

impl GroupView for Group {
    fn group(&self) -> &Group {
        self
    }

    fn group_mut(&mut self) -> &mut Group {
        self
    }
}

impl GroupView for Message {
    fn group(&self) -> &Group {
        self.root()
    }

    fn group_mut(&mut self) -> &mut Group {
        self.root_mut()
    }
}

/// Generate a borrowed view over a nested group.
macro_rules! group_view {
    ($(#[$meta:meta])* $view:ident => $structure:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $view<'a> {
            group: &'a mut Group,
        }

        impl<'a> $view<'a> {
            pub const STRUCTURE: &'static str = $structure;

            pub fn new(group: &'a mut Group) -> Self {
                Self { group }
            }

            pub fn into_group(self) -> &'a mut Group {
                self.group
            }
        }

        impl GroupView for $view<'_> {
            fn group(&self) -> &Group {
                &*self.group
            }

            fn group_mut(&mut self) -> &mut Group {
                &mut *self.group
            }
        }
    };
}

/// Generate an owned wrapper around a whole message.
macro_rules! message_type {
    ($(#[$meta:meta])* $name:ident => $structure:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            message: Message,
        }

        impl $name {
            pub const STRUCTURE: &'static str = $structure;

            pub fn new(config: StructureConfig) -> Result<Self> {
                Ok(Self {
                    message: Message::from_registry($structure, config)?,
                })
            }

            pub fn message(&self) -> &Message {
                &self.message
            }

            pub fn message_mut(&mut self) -> &mut Message {
                &mut self.message
            }

            pub fn into_message(self) -> Message {
                self.message
            }
        }

        impl GroupView for $name {
            fn group(&self) -> &Group {
                self.message.root()
            }

            fn group_mut(&mut self) -> &mut Group {
                self.message.root_mut()
            }
        }
    };
}

/// Generate named accessors for the slots of a wrapper.
///
/// Singular slots get a getter; repeating slots get an indexed getter, an
/// appender and a repetition count.
macro_rules! slot_accessors {
    () => {};
    (segment $get:ident => $name:literal; $($rest:tt)*) => {
        pub fn $get(&mut self) -> Result<&mut Segment> {
            self.group_mut().get_segment($name)
        }

        slot_accessors! { $($rest)* }
    };
    (segments $get:ident, $add:ident, $reps:ident => $name:literal; $($rest:tt)*) => {
        pub fn $get(&mut self, rep: usize) -> Result<&mut Segment> {
            self.group_mut().get_segment_rep($name, rep)
        }

        pub fn $add(&mut self) -> Result<&mut Segment> {
            self.group_mut().add_structure($name)?.as_segment_mut()
        }

        pub fn $reps(&self) -> Result<usize> {
            self.group().repetitions_used($name)
        }

        slot_accessors! { $($rest)* }
    };
    (group $get:ident => $name:literal : $view:ident; $($rest:tt)*) => {
        pub fn $get(&mut self) -> Result<$view<'_>> {
            Ok($view::new(self.group_mut().get_group($name)?))
        }

        slot_accessors! { $($rest)* }
    };
    (groups $get:ident, $add:ident, $reps:ident => $name:literal : $view:ident; $($rest:tt)*) => {
        pub fn $get(&mut self, rep: usize) -> Result<$view<'_>> {
            Ok($view::new(self.group_mut().get_group_rep($name, rep)?))
        }

        pub fn $add(&mut self) -> Result<$view<'_>> {
            Ok($view::new(self.group_mut().add_structure($name)?.as_group_mut()?))
        }

        pub fn $reps(&self) -> Result<usize> {
            self.group().repetitions_used($name)
        }

        slot_accessors! { $($rest)* }
    };
}

// === ADT_A01 ===

message_type! {
    /// ADT^A01 Admit/Visit Notification.
    AdtA01 => "ADT_A01"
}

impl AdtA01 {
    slot_accessors! {
        segment msh => "MSH";
        segments sft, add_sft, sft_reps => "SFT";
        segment evn => "EVN";
        segment pid => "PID";
        segment pd1 => "PD1";
        segments rol, add_rol, rol_reps => "ROL";
        segments nk1, add_nk1, nk1_reps => "NK1";
        segment pv1 => "PV1";
        segments rol2, add_rol2, rol2_reps => "ROL2";
        segments obx, add_obx, obx_reps => "OBX";
        segments al1, add_al1, al1_reps => "AL1";
        segments dg1, add_dg1, dg1_reps => "DG1";
        groups procedure, add_procedure, procedure_reps => "PROCEDURE": AdtA01Procedure;
        groups insurance, add_insurance, insurance_reps => "INSURANCE": AdtA01Insurance;
    }
}

group_view!(AdtA01Procedure => "ADT_A01_PROCEDURE");

impl AdtA01Procedure<'_> {
    slot_accessors! {
        segment pr1 => "PR1";
        segments rol, add_rol, rol_reps => "ROL";
    }
}

group_view!(AdtA01Insurance => "ADT_A01_INSURANCE");

impl AdtA01Insurance<'_> {
    slot_accessors! {
        segment in1 => "IN1";
        segments rol, add_rol, rol_reps => "ROL";
    }
}

// === ORU_R01 ===

message_type! {
    /// ORU^R01 Unsolicited Observation Message.
    OruR01 => "ORU_R01"
}

impl OruR01 {
    slot_accessors! {
        segment msh => "MSH";
        segments sft, add_sft, sft_reps => "SFT";
        groups patient_result, add_patient_result, patient_result_reps => "PATIENT_RESULT": OruR01PatientResult;
    }
}

group_view!(OruR01PatientResult => "ORU_R01_PATIENT_RESULT");

impl OruR01PatientResult<'_> {
    slot_accessors! {
        group patient => "PATIENT": OruR01Patient;
        groups order_observation, add_order_observation, order_observation_reps => "ORDER_OBSERVATION": OruR01OrderObservation;
    }
}

group_view!(OruR01Patient => "ORU_R01_PATIENT");

impl OruR01Patient<'_> {
    slot_accessors! {
        segment pid => "PID";
        segment pd1 => "PD1";
        segments nte, add_nte, nte_reps => "NTE";
        segments nk1, add_nk1, nk1_reps => "NK1";
        group visit => "VISIT": OruR01Visit;
    }
}

group_view!(OruR01Visit => "ORU_R01_VISIT");

impl OruR01Visit<'_> {
    slot_accessors! {
        segment pv1 => "PV1";
    }
}

group_view!(OruR01OrderObservation => "ORU_R01_ORDER_OBSERVATION");

impl OruR01OrderObservation<'_> {
    slot_accessors! {
        segment orc => "ORC";
        segment obr => "OBR";
        segments nte, add_nte, nte_reps => "NTE";
        groups timing_qty, add_timing_qty, timing_qty_reps => "TIMING_QTY": OruR01TimingQty;
        groups observation, add_observation, observation_reps => "OBSERVATION": OruR01Observation;
    }
}

group_view!(OruR01TimingQty => "ORU_R01_TIMING_QTY");

impl OruR01TimingQty<'_> {
    slot_accessors! {
        segment tq1 => "TQ1";
    }
}

group_view!(OruR01Observation => "ORU_R01_OBSERVATION");

impl OruR01Observation<'_> {
    slot_accessors! {
        segment obx => "OBX";
        segments nte, add_nte, nte_reps => "NTE";
    }
}

// === ACK ===

message_type! {
    /// General acknowledgment.
    Ack => "ACK"
}

impl Ack {
    slot_accessors! {
        segment msh => "MSH";
        segments sft, add_sft, sft_reps => "SFT";
        segment msa => "MSA";
        segments err, add_err, err_reps => "ERR";
    }
}
