//! HL7 v2.5 segment layouts.

use super::tables::{FieldDef, SegmentDef};

pub static MSH: SegmentDef = SegmentDef {
    name: "MSH",
    description: "Message Header",
    fields: &[
        FieldDef::new("ST", 1, "Field Separator").required(),
        FieldDef::new("ST", 4, "Encoding Characters").required(),
        FieldDef::new("HD", 227, "Sending Application"),
        FieldDef::new("HD", 227, "Sending Facility"),
        FieldDef::new("HD", 227, "Receiving Application"),
        FieldDef::new("HD", 227, "Receiving Facility"),
        FieldDef::new("TS", 26, "Date/Time Of Message").required(),
        FieldDef::new("ST", 40, "Security"),
        FieldDef::new("MSG", 15, "Message Type").required(),
        FieldDef::new("ST", 20, "Message Control ID").required(),
        FieldDef::new("PT", 3, "Processing ID").required(),
        FieldDef::new("VID", 60, "Version ID").required(),
        FieldDef::new("NM", 15, "Sequence Number"),
        FieldDef::new("ST", 180, "Continuation Pointer"),
        FieldDef::new("ID", 2, "Accept Acknowledgment Type"),
        FieldDef::new("ID", 2, "Application Acknowledgment Type"),
        FieldDef::new("ID", 3, "Country Code"),
        FieldDef::new("ID", 16, "Character Set").repeating(),
        FieldDef::new("CE", 250, "Principal Language Of Message"),
        FieldDef::new("ID", 20, "Alternate Character Set Handling Scheme"),
        FieldDef::new("EI", 427, "Message Profile Identifier").repeating(),
    ],
};

pub static SFT: SegmentDef = SegmentDef {
    name: "SFT",
    description: "Software Segment",
    fields: &[
        FieldDef::new("XON", 567, "Software Vendor Organization").required(),
        FieldDef::new("ST", 15, "Software Certified Version or Release Number").required(),
        FieldDef::new("ST", 20, "Software Product Name").required(),
        FieldDef::new("ST", 20, "Software Binary ID").required(),
        FieldDef::new("TX", 1024, "Software Product Information"),
        FieldDef::new("TS", 26, "Software Install Date"),
    ],
};

pub static EVN: SegmentDef = SegmentDef {
    name: "EVN",
    description: "Event Type",
    fields: &[
        FieldDef::new("ID", 3, "Event Type Code"),
        FieldDef::new("TS", 26, "Recorded Date/Time").required(),
        FieldDef::new("TS", 26, "Date/Time Planned Event"),
        FieldDef::new("IS", 3, "Event Reason Code"),
        FieldDef::new("XCN", 250, "Operator ID").repeating(),
        FieldDef::new("TS", 26, "Event Occurred"),
        FieldDef::new("HD", 241, "Event Facility"),
    ],
};

pub static PID: SegmentDef = SegmentDef {
    name: "PID",
    description: "Patient Identification",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - PID"),
        FieldDef::new("CX", 20, "Patient ID"),
        FieldDef::new("CX", 250, "Patient Identifier List").required().repeating(),
        FieldDef::new("CX", 20, "Alternate Patient ID - PID").repeating(),
        FieldDef::new("XPN", 250, "Patient Name").required().repeating(),
        FieldDef::new("XPN", 250, "Mother's Maiden Name").repeating(),
        FieldDef::new("TS", 26, "Date/Time of Birth"),
        FieldDef::new("IS", 1, "Administrative Sex"),
        FieldDef::new("XPN", 250, "Patient Alias").repeating(),
        FieldDef::new("CE", 250, "Race").repeating(),
        FieldDef::new("XAD", 250, "Patient Address").repeating(),
        FieldDef::new("IS", 4, "County Code"),
        FieldDef::new("XTN", 250, "Phone Number - Home").repeating(),
        FieldDef::new("XTN", 250, "Phone Number - Business").repeating(),
        FieldDef::new("CE", 250, "Primary Language"),
        FieldDef::new("CE", 250, "Marital Status"),
        FieldDef::new("CE", 250, "Religion"),
        FieldDef::new("CX", 250, "Patient Account Number"),
        FieldDef::new("ST", 16, "SSN Number - Patient"),
        FieldDef::new("DLN", 25, "Driver's License Number - Patient"),
        FieldDef::new("CX", 250, "Mother's Identifier").repeating(),
        FieldDef::new("CE", 250, "Ethnic Group").repeating(),
        FieldDef::new("ST", 250, "Birth Place"),
        FieldDef::new("ID", 1, "Multiple Birth Indicator"),
        FieldDef::new("NM", 2, "Birth Order"),
        FieldDef::new("CE", 250, "Citizenship").repeating(),
        FieldDef::new("CE", 250, "Veterans Military Status"),
        FieldDef::new("CE", 250, "Nationality"),
        FieldDef::new("TS", 26, "Patient Death Date and Time"),
        FieldDef::new("ID", 1, "Patient Death Indicator"),
        FieldDef::new("ID", 1, "Identity Unknown Indicator"),
        FieldDef::new("IS", 20, "Identity Reliability Code").repeating(),
        FieldDef::new("TS", 26, "Last Update Date/Time"),
        FieldDef::new("HD", 241, "Last Update Facility"),
        FieldDef::new("CE", 250, "Species Code"),
        FieldDef::new("CE", 250, "Breed Code"),
        FieldDef::new("ST", 80, "Strain"),
        FieldDef::new("CE", 250, "Production Class Code").repeating(),
        FieldDef::new("CWE", 250, "Tribal Citizenship").repeating(),
    ],
};

pub static PD1: SegmentDef = SegmentDef {
    name: "PD1",
    description: "Patient Additional Demographic",
    fields: &[
        FieldDef::new("IS", 2, "Living Dependency").repeating(),
        FieldDef::new("IS", 2, "Living Arrangement"),
        FieldDef::new("XON", 250, "Patient Primary Facility").repeating(),
        FieldDef::new("XCN", 250, "Patient Primary Care Provider Name & ID No.").repeating(),
        FieldDef::new("IS", 2, "Student Indicator"),
        FieldDef::new("IS", 2, "Handicap"),
        FieldDef::new("IS", 2, "Living Will Code"),
        FieldDef::new("IS", 2, "Organ Donor Code"),
        FieldDef::new("ID", 1, "Separate Bill"),
        FieldDef::new("CX", 250, "Duplicate Patient").repeating(),
        FieldDef::new("CE", 250, "Publicity Code"),
        FieldDef::new("ID", 1, "Protection Indicator"),
        FieldDef::new("DT", 8, "Protection Indicator Effective Date"),
        FieldDef::new("XON", 250, "Place of Worship").repeating(),
        FieldDef::new("CE", 250, "Advance Directive Code").repeating(),
        FieldDef::new("IS", 1, "Immunization Registry Status"),
        FieldDef::new("DT", 8, "Immunization Registry Status Effective Date"),
        FieldDef::new("DT", 8, "Publicity Code Effective Date"),
        FieldDef::new("IS", 5, "Military Branch"),
        FieldDef::new("IS", 2, "Military Rank/Grade"),
        FieldDef::new("IS", 3, "Military Status"),
    ],
};

pub static NK1: SegmentDef = SegmentDef {
    name: "NK1",
    description: "Next of Kin / Associated Parties",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - NK1").required(),
        FieldDef::new("XPN", 250, "Name").repeating(),
        FieldDef::new("CE", 250, "Relationship"),
        FieldDef::new("XAD", 250, "Address").repeating(),
        FieldDef::new("XTN", 250, "Phone Number").repeating(),
        FieldDef::new("XTN", 250, "Business Phone Number").repeating(),
        FieldDef::new("CE", 250, "Contact Role"),
        FieldDef::new("DT", 8, "Start Date"),
        FieldDef::new("DT", 8, "End Date"),
        FieldDef::new("ST", 60, "Next of Kin / Associated Parties Job Title"),
        FieldDef::new("JCC", 20, "Next of Kin / Associated Parties Job Code/Class"),
        FieldDef::new("CX", 250, "Next of Kin / Associated Parties Employee Number"),
        FieldDef::new("XON", 250, "Organization Name - NK1").repeating(),
        FieldDef::new("CE", 250, "Marital Status"),
        FieldDef::new("IS", 1, "Administrative Sex"),
        FieldDef::new("TS", 26, "Date/Time of Birth"),
        FieldDef::new("IS", 2, "Living Dependency").repeating(),
        FieldDef::new("IS", 2, "Ambulatory Status").repeating(),
        FieldDef::new("CE", 250, "Citizenship").repeating(),
        FieldDef::new("CE", 250, "Primary Language"),
        FieldDef::new("IS", 2, "Living Arrangement"),
        FieldDef::new("CE", 250, "Publicity Code"),
        FieldDef::new("ID", 1, "Protection Indicator"),
        FieldDef::new("IS", 2, "Student Indicator"),
        FieldDef::new("CE", 250, "Religion"),
        FieldDef::new("XPN", 250, "Mother's Maiden Name").repeating(),
        FieldDef::new("CE", 250, "Nationality"),
        FieldDef::new("CE", 250, "Ethnic Group").repeating(),
        FieldDef::new("CE", 250, "Contact Reason").repeating(),
        FieldDef::new("XPN", 250, "Contact Person's Name").repeating(),
        FieldDef::new("XTN", 250, "Contact Person's Telephone Number").repeating(),
        FieldDef::new("XAD", 250, "Contact Person's Address").repeating(),
        FieldDef::new("CX", 250, "Next of Kin/Associated Party's Identifiers").repeating(),
        FieldDef::new("IS", 2, "Job Status"),
        FieldDef::new("CE", 250, "Race").repeating(),
        FieldDef::new("IS", 2, "Handicap"),
        FieldDef::new("ST", 16, "Contact Person Social Security Number"),
        FieldDef::new("ST", 250, "Next of Kin Birth Place"),
        FieldDef::new("IS", 2, "VIP Indicator"),
    ],
};

pub static PV1: SegmentDef = SegmentDef {
    name: "PV1",
    description: "Patient Visit",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - PV1"),
        FieldDef::new("IS", 1, "Patient Class").required(),
        FieldDef::new("PL", 80, "Assigned Patient Location"),
        FieldDef::new("IS", 2, "Admission Type"),
        FieldDef::new("CX", 250, "Preadmit Number"),
        FieldDef::new("PL", 80, "Prior Patient Location"),
        FieldDef::new("XCN", 250, "Attending Doctor").repeating(),
        FieldDef::new("XCN", 250, "Referring Doctor").repeating(),
        FieldDef::new("XCN", 250, "Consulting Doctor").repeating(),
        FieldDef::new("IS", 3, "Hospital Service"),
        FieldDef::new("PL", 80, "Temporary Location"),
        FieldDef::new("IS", 2, "Preadmit Test Indicator"),
        FieldDef::new("IS", 2, "Re-admission Indicator"),
        FieldDef::new("IS", 6, "Admit Source"),
        FieldDef::new("IS", 2, "Ambulatory Status").repeating(),
        FieldDef::new("IS", 2, "VIP Indicator"),
        FieldDef::new("XCN", 250, "Admitting Doctor").repeating(),
        FieldDef::new("IS", 2, "Patient Type"),
        FieldDef::new("CX", 250, "Visit Number"),
        FieldDef::new("FC", 50, "Financial Class").repeating(),
        FieldDef::new("IS", 2, "Charge Price Indicator"),
        FieldDef::new("IS", 2, "Courtesy Code"),
        FieldDef::new("IS", 2, "Credit Rating"),
        FieldDef::new("IS", 2, "Contract Code").repeating(),
        FieldDef::new("DT", 8, "Contract Effective Date").repeating(),
        FieldDef::new("NM", 12, "Contract Amount").repeating(),
        FieldDef::new("NM", 3, "Contract Period").repeating(),
        FieldDef::new("IS", 2, "Interest Code"),
        FieldDef::new("IS", 4, "Transfer to Bad Debt Code"),
        FieldDef::new("DT", 8, "Transfer to Bad Debt Date"),
        FieldDef::new("IS", 10, "Bad Debt Agency Code"),
        FieldDef::new("NM", 12, "Bad Debt Transfer Amount"),
        FieldDef::new("NM", 12, "Bad Debt Recovery Amount"),
        FieldDef::new("IS", 1, "Delete Account Indicator"),
        FieldDef::new("DT", 8, "Delete Account Date"),
        FieldDef::new("IS", 3, "Discharge Disposition"),
        FieldDef::new("DLD", 47, "Discharged to Location"),
        FieldDef::new("CE", 250, "Diet Type"),
        FieldDef::new("IS", 2, "Servicing Facility"),
        FieldDef::new("IS", 1, "Bed Status"),
        FieldDef::new("IS", 2, "Account Status"),
        FieldDef::new("PL", 80, "Pending Location"),
        FieldDef::new("PL", 80, "Prior Temporary Location"),
        FieldDef::new("TS", 26, "Admit Date/Time"),
        FieldDef::new("TS", 26, "Discharge Date/Time").repeating(),
        FieldDef::new("NM", 12, "Current Patient Balance"),
        FieldDef::new("NM", 12, "Total Charges"),
        FieldDef::new("NM", 12, "Total Adjustments"),
        FieldDef::new("NM", 12, "Total Payments"),
        FieldDef::new("CX", 250, "Alternate Visit ID"),
        FieldDef::new("IS", 1, "Visit Indicator"),
        FieldDef::new("XCN", 250, "Other Healthcare Provider").repeating(),
    ],
};

pub static ROL: SegmentDef = SegmentDef {
    name: "ROL",
    description: "Role",
    fields: &[
        FieldDef::new("EI", 60, "Role Instance ID"),
        FieldDef::new("ID", 2, "Action Code").required(),
        FieldDef::new("CE", 250, "Role-ROL").required(),
        FieldDef::new("XCN", 250, "Role Person").required().repeating(),
        FieldDef::new("TS", 26, "Role Begin Date/Time"),
        FieldDef::new("TS", 26, "Role End Date/Time"),
        FieldDef::new("CE", 250, "Role Duration"),
        FieldDef::new("CE", 250, "Role Action Reason"),
        FieldDef::new("CE", 250, "Provider Type").repeating(),
        FieldDef::new("CE", 250, "Organization Unit Type"),
        FieldDef::new("XAD", 250, "Office/Home Address/Birthplace").repeating(),
        FieldDef::new("XTN", 250, "Phone").repeating(),
    ],
};

pub static OBX: SegmentDef = SegmentDef {
    name: "OBX",
    description: "Observation/Result",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - OBX"),
        FieldDef::new("ID", 2, "Value Type"),
        FieldDef::new("CE", 250, "Observation Identifier").required(),
        FieldDef::new("ST", 20, "Observation Sub-ID"),
        FieldDef::new("Varies", 65536, "Observation Value").repeating(),
        FieldDef::new("CE", 250, "Units"),
        FieldDef::new("ST", 60, "References Range"),
        FieldDef::new("IS", 5, "Abnormal Flags").repeating(),
        FieldDef::new("NM", 5, "Probability"),
        FieldDef::new("ID", 2, "Nature of Abnormal Test").repeating(),
        FieldDef::new("ID", 1, "Observation Result Status").required(),
        FieldDef::new("TS", 26, "Effective Date of Reference Range"),
        FieldDef::new("ST", 20, "User Defined Access Checks"),
        FieldDef::new("TS", 26, "Date/Time of the Observation"),
        FieldDef::new("CE", 250, "Producer's ID"),
        FieldDef::new("XCN", 250, "Responsible Observer").repeating(),
        FieldDef::new("CE", 250, "Observation Method").repeating(),
        FieldDef::new("EI", 22, "Equipment Instance Identifier").repeating(),
        FieldDef::new("TS", 26, "Date/Time of the Analysis"),
    ],
};

pub static AL1: SegmentDef = SegmentDef {
    name: "AL1",
    description: "Patient Allergy Information",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - AL1").required(),
        FieldDef::new("CE", 250, "Allergen Type Code"),
        FieldDef::new("CE", 250, "Allergen Code/Mnemonic/Description").required(),
        FieldDef::new("CE", 250, "Allergy Severity Code"),
        FieldDef::new("ST", 15, "Allergy Reaction Code").repeating(),
        FieldDef::new("DT", 8, "Identification Date"),
    ],
};

pub static DG1: SegmentDef = SegmentDef {
    name: "DG1",
    description: "Diagnosis",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - DG1").required(),
        FieldDef::new("ID", 2, "Diagnosis Coding Method"),
        FieldDef::new("CE", 250, "Diagnosis Code - DG1"),
        FieldDef::new("ST", 40, "Diagnosis Description"),
        FieldDef::new("TS", 26, "Diagnosis Date/Time"),
        FieldDef::new("IS", 2, "Diagnosis Type").required(),
        FieldDef::new("CE", 250, "Major Diagnostic Category"),
        FieldDef::new("CE", 250, "Diagnostic Related Group"),
        FieldDef::new("ID", 1, "DRG Approval Indicator"),
        FieldDef::new("IS", 2, "DRG Grouper Review Code"),
        FieldDef::new("CE", 250, "Outlier Type"),
        FieldDef::new("NM", 3, "Outlier Days"),
        FieldDef::new("CP", 12, "Outlier Cost"),
        FieldDef::new("ST", 4, "Grouper Version And Type"),
        FieldDef::new("ID", 2, "Diagnosis Priority"),
        FieldDef::new("XCN", 250, "Diagnosing Clinician").repeating(),
        FieldDef::new("IS", 3, "Diagnosis Classification"),
        FieldDef::new("ID", 1, "Confidential Indicator"),
        FieldDef::new("TS", 26, "Attestation Date/Time"),
        FieldDef::new("EI", 427, "Diagnosis Identifier"),
        FieldDef::new("ID", 1, "Diagnosis Action Code"),
    ],
};

pub static PR1: SegmentDef = SegmentDef {
    name: "PR1",
    description: "Procedures",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - PR1").required(),
        FieldDef::new("IS", 3, "Procedure Coding Method"),
        FieldDef::new("CE", 250, "Procedure Code").required(),
        FieldDef::new("ST", 40, "Procedure Description"),
        FieldDef::new("TS", 26, "Procedure Date/Time").required(),
        FieldDef::new("IS", 2, "Procedure Functional Type"),
        FieldDef::new("NM", 4, "Procedure Minutes"),
        FieldDef::new("XCN", 250, "Anesthesiologist").repeating(),
        FieldDef::new("IS", 2, "Anesthesia Code"),
        FieldDef::new("NM", 4, "Anesthesia Minutes"),
        FieldDef::new("XCN", 250, "Surgeon").repeating(),
        FieldDef::new("XCN", 250, "Procedure Practitioner").repeating(),
        FieldDef::new("CE", 250, "Consent Code"),
        FieldDef::new("ID", 2, "Procedure Priority"),
        FieldDef::new("CE", 250, "Associated Diagnosis Code"),
        FieldDef::new("CE", 250, "Procedure Code Modifier").repeating(),
        FieldDef::new("IS", 20, "Procedure DRG Type"),
        FieldDef::new("CE", 250, "Tissue Type Code").repeating(),
        FieldDef::new("EI", 427, "Procedure Identifier"),
        FieldDef::new("ID", 1, "Procedure Action Code"),
    ],
};

pub static IN1: SegmentDef = SegmentDef {
    name: "IN1",
    description: "Insurance",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - IN1").required(),
        FieldDef::new("CE", 250, "Insurance Plan ID").required(),
        FieldDef::new("CX", 250, "Insurance Company ID").required().repeating(),
        FieldDef::new("XON", 250, "Insurance Company Name").repeating(),
        FieldDef::new("XAD", 250, "Insurance Company Address").repeating(),
        FieldDef::new("XPN", 250, "Insurance Co Contact Person").repeating(),
        FieldDef::new("XTN", 250, "Insurance Co Phone Number").repeating(),
        FieldDef::new("ST", 12, "Group Number"),
        FieldDef::new("XON", 250, "Group Name").repeating(),
        FieldDef::new("CX", 250, "Insured's Group Emp ID").repeating(),
        FieldDef::new("XON", 250, "Insured's Group Emp Name").repeating(),
        FieldDef::new("DT", 8, "Plan Effective Date"),
        FieldDef::new("DT", 8, "Plan Expiration Date"),
        FieldDef::new("AUI", 239, "Authorization Information"),
        FieldDef::new("IS", 3, "Plan Type"),
        FieldDef::new("XPN", 250, "Name Of Insured").repeating(),
        FieldDef::new("CE", 250, "Insured's Relationship To Patient"),
        FieldDef::new("TS", 26, "Insured's Date Of Birth"),
        FieldDef::new("XAD", 250, "Insured's Address").repeating(),
        FieldDef::new("IS", 2, "Assignment Of Benefits"),
        FieldDef::new("IS", 2, "Coordination Of Benefits"),
        FieldDef::new("ST", 2, "Coord Of Ben. Priority"),
        FieldDef::new("ID", 1, "Notice Of Admission Flag"),
        FieldDef::new("DT", 8, "Notice Of Admission Date"),
        FieldDef::new("ID", 1, "Report Of Eligibility Flag"),
        FieldDef::new("DT", 8, "Report Of Eligibility Date"),
        FieldDef::new("IS", 2, "Release Information Code"),
        FieldDef::new("ST", 15, "Pre-Admit Cert (PAC)"),
        FieldDef::new("TS", 26, "Verification Date/Time"),
        FieldDef::new("XCN", 250, "Verification By").repeating(),
        FieldDef::new("IS", 2, "Type Of Agreement Code"),
        FieldDef::new("IS", 2, "Billing Status"),
        FieldDef::new("NM", 4, "Lifetime Reserve Days"),
        FieldDef::new("NM", 4, "Delay Before L.R. Day"),
        FieldDef::new("IS", 8, "Company Plan Code"),
        FieldDef::new("ST", 15, "Policy Number"),
        FieldDef::new("CP", 12, "Policy Deductible"),
        FieldDef::new("CP", 12, "Policy Limit - Amount"),
        FieldDef::new("NM", 4, "Policy Limit - Days"),
        FieldDef::new("CP", 12, "Room Rate - Semi-Private"),
        FieldDef::new("CP", 12, "Room Rate - Private"),
        FieldDef::new("CE", 250, "Insured's Employment Status"),
        FieldDef::new("IS", 1, "Insured's Administrative Sex"),
        FieldDef::new("XAD", 250, "Insured's Employer's Address").repeating(),
        FieldDef::new("ST", 2, "Verification Status"),
        FieldDef::new("IS", 8, "Prior Insurance Plan ID"),
        FieldDef::new("IS", 3, "Coverage Type"),
        FieldDef::new("IS", 2, "Handicap"),
        FieldDef::new("CX", 250, "Insured's ID Number").repeating(),
        FieldDef::new("IS", 1, "Signature Code"),
        FieldDef::new("DT", 8, "Signature Code Date"),
        FieldDef::new("ST", 250, "Insured's Birth Place"),
        FieldDef::new("ID", 2, "VIP Indicator"),
    ],
};

pub static NTE: SegmentDef = SegmentDef {
    name: "NTE",
    description: "Notes and Comments",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - NTE"),
        FieldDef::new("ID", 8, "Source of Comment"),
        FieldDef::new("FT", 65536, "Comment").repeating(),
        FieldDef::new("CE", 250, "Comment Type"),
    ],
};

pub static ORC: SegmentDef = SegmentDef {
    name: "ORC",
    description: "Common Order",
    fields: &[
        FieldDef::new("ID", 2, "Order Control").required(),
        FieldDef::new("EI", 22, "Placer Order Number"),
        FieldDef::new("EI", 22, "Filler Order Number"),
        FieldDef::new("EI", 22, "Placer Group Number"),
        FieldDef::new("ID", 2, "Order Status"),
        FieldDef::new("ID", 1, "Response Flag"),
        FieldDef::new("TQ", 200, "Quantity/Timing").repeating(),
        FieldDef::new("EIP", 200, "Parent"),
        FieldDef::new("TS", 26, "Date/Time of Transaction"),
        FieldDef::new("XCN", 250, "Entered By").repeating(),
        FieldDef::new("XCN", 250, "Verified By").repeating(),
        FieldDef::new("XCN", 250, "Ordering Provider").repeating(),
        FieldDef::new("PL", 80, "Enterer's Location"),
        FieldDef::new("XTN", 250, "Call Back Phone Number").repeating(),
        FieldDef::new("TS", 26, "Order Effective Date/Time"),
        FieldDef::new("CE", 250, "Order Control Code Reason"),
        FieldDef::new("CE", 250, "Entering Organization"),
        FieldDef::new("CE", 250, "Entering Device"),
        FieldDef::new("XCN", 250, "Action By").repeating(),
        FieldDef::new("CE", 250, "Advanced Beneficiary Notice Code"),
        FieldDef::new("XON", 250, "Ordering Facility Name").repeating(),
        FieldDef::new("XAD", 250, "Ordering Facility Address").repeating(),
        FieldDef::new("XTN", 250, "Ordering Facility Phone Number").repeating(),
        FieldDef::new("XAD", 250, "Ordering Provider Address").repeating(),
        FieldDef::new("CWE", 250, "Order Status Modifier"),
        FieldDef::new("CWE", 60, "Advanced Beneficiary Notice Override Reason"),
        FieldDef::new("TS", 26, "Filler's Expected Availability Date/Time"),
        FieldDef::new("CWE", 250, "Confidentiality Code"),
        FieldDef::new("CWE", 250, "Order Type"),
        FieldDef::new("CNE", 250, "Enterer Authorization Mode"),
        FieldDef::new("CWE", 250, "Parent Universal Service Identifier"),
    ],
};

pub static OBR: SegmentDef = SegmentDef {
    name: "OBR",
    description: "Observation Request",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - OBR"),
        FieldDef::new("EI", 22, "Placer Order Number"),
        FieldDef::new("EI", 22, "Filler Order Number"),
        FieldDef::new("CE", 250, "Universal Service Identifier").required(),
        FieldDef::new("ID", 2, "Priority - OBR"),
        FieldDef::new("TS", 26, "Requested Date/Time"),
        FieldDef::new("TS", 26, "Observation Date/Time"),
        FieldDef::new("TS", 26, "Observation End Date/Time"),
        FieldDef::new("CQ", 20, "Collection Volume"),
        FieldDef::new("XCN", 250, "Collector Identifier").repeating(),
        FieldDef::new("ID", 1, "Specimen Action Code"),
        FieldDef::new("CE", 250, "Danger Code"),
        FieldDef::new("ST", 300, "Relevant Clinical Information"),
        FieldDef::new("TS", 26, "Specimen Received Date/Time"),
        FieldDef::new("SPS", 300, "Specimen Source"),
        FieldDef::new("XCN", 250, "Ordering Provider").repeating(),
        FieldDef::new("XTN", 250, "Order Callback Phone Number").repeating(),
        FieldDef::new("ST", 60, "Placer Field 1"),
        FieldDef::new("ST", 60, "Placer Field 2"),
        FieldDef::new("ST", 60, "Filler Field 1"),
        FieldDef::new("ST", 60, "Filler Field 2"),
        FieldDef::new("TS", 26, "Results Rpt/Status Chng - Date/Time"),
        FieldDef::new("MOC", 40, "Charge to Practice"),
        FieldDef::new("ID", 10, "Diagnostic Serv Sect ID"),
        FieldDef::new("ID", 1, "Result Status"),
        FieldDef::new("PRL", 400, "Parent Result"),
        FieldDef::new("TQ", 200, "Quantity/Timing").repeating(),
        FieldDef::new("XCN", 250, "Result Copies To").repeating(),
        FieldDef::new("EIP", 200, "Parent"),
        FieldDef::new("ID", 20, "Transportation Mode"),
        FieldDef::new("CE", 250, "Reason for Study").repeating(),
        FieldDef::new("NDL", 200, "Principal Result Interpreter"),
        FieldDef::new("NDL", 200, "Assistant Result Interpreter").repeating(),
        FieldDef::new("NDL", 200, "Technician").repeating(),
        FieldDef::new("NDL", 200, "Transcriptionist").repeating(),
        FieldDef::new("TS", 26, "Scheduled Date/Time"),
        FieldDef::new("NM", 4, "Number of Sample Containers"),
        FieldDef::new("CE", 250, "Transport Logistics of Collected Sample").repeating(),
        FieldDef::new("CE", 250, "Collector's Comment").repeating(),
        FieldDef::new("CE", 250, "Transport Arrangement Responsibility"),
        FieldDef::new("ID", 30, "Transport Arranged"),
        FieldDef::new("ID", 1, "Escort Required"),
        FieldDef::new("CE", 250, "Planned Patient Transport Comment").repeating(),
        FieldDef::new("CE", 250, "Procedure Code"),
        FieldDef::new("CE", 250, "Procedure Code Modifier").repeating(),
        FieldDef::new("CE", 250, "Placer Supplemental Service Information").repeating(),
        FieldDef::new("CE", 250, "Filler Supplemental Service Information").repeating(),
        FieldDef::new("CWE", 250, "Medically Necessary Duplicate Procedure Reason"),
        FieldDef::new("IS", 2, "Result Handling"),
    ],
};

pub static TQ1: SegmentDef = SegmentDef {
    name: "TQ1",
    description: "Timing/Quantity",
    fields: &[
        FieldDef::new("SI", 4, "Set ID - TQ1"),
        FieldDef::new("CQ", 20, "Quantity"),
        FieldDef::new("RPT", 540, "Repeat Pattern").repeating(),
        FieldDef::new("TM", 20, "Explicit Time").repeating(),
        FieldDef::new("CQ", 20, "Relative Time and Units").repeating(),
        FieldDef::new("CQ", 20, "Service Duration"),
        FieldDef::new("TS", 26, "Start date/time"),
        FieldDef::new("TS", 26, "End date/time"),
        FieldDef::new("CWE", 250, "Priority").repeating(),
        FieldDef::new("TX", 250, "Condition text"),
        FieldDef::new("TX", 250, "Text instruction"),
        FieldDef::new("ID", 10, "Conjunction"),
        FieldDef::new("CQ", 20, "Occurrence duration"),
        FieldDef::new("NM", 10, "Total occurrences"),
    ],
};

pub static MSA: SegmentDef = SegmentDef {
    name: "MSA",
    description: "Message Acknowledgment",
    fields: &[
        FieldDef::new("ID", 2, "Acknowledgment Code").required(),
        FieldDef::new("ST", 20, "Message Control ID").required(),
        FieldDef::new("ST", 80, "Text Message"),
        FieldDef::new("NM", 15, "Expected Sequence Number"),
        FieldDef::new("ID", 1, "Delayed Acknowledgment Type"),
        FieldDef::new("CE", 250, "Error Condition"),
    ],
};

pub static ERR: SegmentDef = SegmentDef {
    name: "ERR",
    description: "Error",
    fields: &[
        FieldDef::new("ELD", 493, "Error Code and Location").repeating(),
        FieldDef::new("ERL", 18, "Error Location").repeating(),
        FieldDef::new("CWE", 705, "HL7 Error Code").required(),
        FieldDef::new("ID", 2, "Severity").required(),
        FieldDef::new("CWE", 705, "Application Error Code"),
        FieldDef::new("ST", 80, "Application Error Parameter").repeating(),
        FieldDef::new("TX", 2048, "Diagnostic Information"),
        FieldDef::new("TX", 250, "User Message"),
        FieldDef::new("IS", 20, "Inform Person Indicator").repeating(),
        FieldDef::new("CWE", 705, "Override Type"),
        FieldDef::new("CWE", 705, "Override Reason Code").repeating(),
        FieldDef::new("XTN", 652, "Help Desk Contact Point").repeating(),
    ],
};

/// Every segment layout shipped with the crate.
pub static ALL_SEGMENTS: &[&SegmentDef] = &[
    &MSH, &SFT, &EVN, &PID, &PD1, &NK1, &PV1, &ROL,
    &OBX, &AL1, &DG1, &PR1, &IN1, &NTE, &ORC, &OBR,
    &TQ1, &MSA, &ERR,
];
