// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Built-in OSID table
//!
//! Every OSID the crate recognises, grouped by the hardware it runs on.
//! Adding an OSID that is already listed in another group fails the build.

use super::{CosVariants, OsidGroup};
use crate::hardware::HardwareType;
use crate::profile::GroupOverrides;

const KIB_512: u32 = 512 * 1024;
const MIB_1: u32 = 1024 * 1024;
const MIB_2: u32 = 2048 * 1024;

/// Default key algorithm for stock GM service operating systems
const GM_KEY_ALGORITHM: u32 = 40;

/// The built-in groups
pub const BUILTIN_GROUPS: &[OsidGroup] = &[
    // Duramax
    OsidGroup::new("LB7 EFILive COS", LB7_EFILIVE_COS, lb7("LB7 EFILive COS")),
    OsidGroup::new("LB7 9388505", LB7_9388505, lb7("LB7 9388505")),
    OsidGroup::new("LB7 12210729", LB7_12210729, lb7("LB7 12210729")),
    OsidGroup::new("LLY 12244189", LLY_12244189, lly("LLY 12244189")),
    OsidGroup::new("LLY EFILive COS", LLY_EFILIVE_COS, lly("LLY EFILive COS")),
    // VCM Suite custom operating systems, one unlock algorithm each
    OsidGroup::new("VCM Suite 1251001", &[1251001], vcm_suite("VCM Suite 2 Bar", 3)),
    OsidGroup::new("VCM Suite 1261001", &[1261001], vcm_suite("VCM Suite 3 Bar", 4)),
    OsidGroup::new("VCM Suite 1271001", &[1271001], vcm_suite("VCM Suite Mafless", 5)),
    OsidGroup::new("VCM Suite 1281001", &[1281001], vcm_suite("VCM Suite MAF RTT", 6)),
    OsidGroup::new("VCM Suite 1271002", &[1271002], vcm_suite("VCM Suite Mafless", 7)),
    OsidGroup::new("VCM Suite 1251002", &[1251002], vcm_suite("VCM Suite 2 Bar", 8)),
    OsidGroup::new("VCM Suite 1261002", &[1261002], vcm_suite("VCM Suite MAF RTT", 9)),
    OsidGroup::new("VCM Suite 1281002", &[1281002], vcm_suite("VCM Suite 3 Bar", 10)),
    OsidGroup::new("VCM Suite 1271003", &[1271003], vcm_suite("VCM Suite Mafless", 11)),
    OsidGroup::new("VCM Suite 1251003", &[1251003], vcm_suite("VCM Suite 2 Bar", 12)),
    OsidGroup::new("VCM Suite 1261003", &[1261003], vcm_suite("VCM Suite 3 Bar", 13)),
    OsidGroup::new("VCM Suite 1281003", &[1281003], vcm_suite("VCM Suite MAF RTT", 14)),
    // HPT builds keep the base key algorithm
    OsidGroup::new(
        "HPT COS",
        HPT_COS,
        GroupOverrides::described("Unknown VCM Suite COS").image(0, KIB_512),
    ),
    // 512 KiB service operating systems
    OsidGroup::new("9354896", SERVICE_9354896, gm_512k("9354896")),
    OsidGroup::new("12200411", SERVICE_12200411, gm_512k("12200411")),
    OsidGroup::new("EFI Live COS", EFILIVE_COS, gm_512k("EFI Live COS"))
        .with_cos_variants(EFILIVE_COS_VARIANTS),
    // 1 MiB service operating systems; image base stays at the default
    OsidGroup::new("12589463", SERVICE_12589463, gm_1m("12589463")),
    OsidGroup::new("12586242", SERVICE_12586242, gm_1m("12586242")),
    OsidGroup::new("12586243", SERVICE_12586243, gm_1m("12586243")),
    OsidGroup::new("12582605", SERVICE_12582605, gm_1m("12582605")),
    OsidGroup::new("12582811", SERVICE_12582811, gm_1m("12582811")),
    OsidGroup::new("12602802", SERVICE_12602802, gm_1m("12602802")),
    OsidGroup::new(
        "Black Box 9366810",
        BLACK_BOX,
        GroupOverrides::described("'Black Box' 9366810")
            .supported(false)
            .key_algorithm(15)
            .image(0, KIB_512)
            .hardware_type(HardwareType::BlackBox),
    ),
    OsidGroup::new("P04 Intel", P04_INTEL, p04(HardwareType::P04Intel)),
    OsidGroup::new("P04 AMD", P04_AMD, p04(HardwareType::P04Amd)),
    OsidGroup::new(
        "P10",
        P10,
        GroupOverrides::described("P10")
            .supported(true)
            .key_algorithm(66)
            .image(0, KIB_512)
            .kernel(HardwareType::P10.kernel_defaults())
            .validation_method(HardwareType::P10)
            .hardware_type(HardwareType::P10),
    ),
    OsidGroup::new("P12 1m", P12_1M, p12("P12 1m (Atlas I4/I5/I6)", MIB_1)),
    OsidGroup::new("P12 2m", P12_2M, p12("P12 2m (Atlas I4/I5/I6)", MIB_2)),
];

/// Looked up with the key chosen by the resolver's `DescriptionMode`
const EFILIVE_COS_VARIANTS: CosVariants = &[
    (1, "EFI Live COS1"),
    (2, "EFI Live COS2"),
    (3, "EFI Live COS3"),
    (5, "EFI Live COS5"),
];

const fn lb7(description: &'static str) -> GroupOverrides {
    GroupOverrides::described(description)
        .key_algorithm(2)
        .image(0, KIB_512)
        .hardware_type(HardwareType::Lb7)
}

const fn lly(description: &'static str) -> GroupOverrides {
    GroupOverrides::described(description)
        .supported(false)
        .key_algorithm(2)
        .image(0, MIB_1)
        .hardware_type(HardwareType::Lly)
}

const fn vcm_suite(description: &'static str, key_algorithm: u32) -> GroupOverrides {
    GroupOverrides::described(description)
        .key_algorithm(key_algorithm)
        .image(0, KIB_512)
}

const fn gm_512k(description: &'static str) -> GroupOverrides {
    GroupOverrides::described(description)
        .key_algorithm(GM_KEY_ALGORITHM)
        .image(0, KIB_512)
}

const fn gm_1m(description: &'static str) -> GroupOverrides {
    GroupOverrides::described(description)
        .key_algorithm(GM_KEY_ALGORITHM)
        .image_size(MIB_1)
}

const fn p04(flash: HardwareType) -> GroupOverrides {
    GroupOverrides::described("1998-2005 V6")
        .supported(true)
        .key_algorithm(14)
        .image(0, KIB_512)
        .kernel(flash.kernel_defaults())
        .validation_method(flash)
        .hardware_type(flash)
}

const fn p12(description: &'static str, image_size: u32) -> GroupOverrides {
    GroupOverrides::described(description)
        .supported(true)
        .key_algorithm(91)
        .image(0, image_size)
        .kernel(HardwareType::P12.kernel_defaults())
        .validation_method(HardwareType::P12)
        .hardware_type(HardwareType::P12)
}

const LB7_EFILIVE_COS: &[u32] = &[
    1337601, 1710001, 1887301, 2444101, 2600601, 2685301, 3904401, 1337605,
    1710005, 1887305, 2444105, 2600605, 2685305, 3904405,
];

const LB7_9388505: &[u32] = &[15063376, 15188873, 15097100];

const LB7_12210729: &[u32] = &[15094441, 15085499, 15166853, 15186006, 15189044];

const LLY_12244189: &[u32] = &[
    15141668, 15193885, 15228758, 15231599, 15231600, 15879103, 15087230,
];

const LLY_EFILIVE_COS: &[u32] = &[
    4166801, 4166805, 5160001, 5160005, 5388501, 5388505, 5875801, 5875805,
];

const HPT_COS: &[u32] = &[
    1250013, 1250018, 1251005, 1251006, 1251008, 1251010, 1251011, 1251012,
    1251014, 1251016, 1251017, 1260006, 1260011, 1261005, 1261008, 1261014,
    1261016, 1270013, 1270017, 1271005, 1271006, 1271008, 1271010, 1271011,
    1271012, 1271014, 1271016, 1271018, 1281005, 1281006, 1281008, 1281010,
    1281011, 1281012, 1281014, 1281016, 1281918,
];

const SERVICE_9354896: &[u32] = &[
    9360360, 9360361, 9361140, 9363996, 9365637, 9373372, 9379910, 9381344,
    12205612, 12584929, 12593359, 12597506, 16253027,
];

const SERVICE_12200411: &[u32] = &[
    12202088, 12206871, 12208322, 12209203, 12212156, 12216125, 12221588, 12225074,
    12593358,
];

const EFILIVE_COS: &[u32] = &[
    1250001, 1290001, 2020002, 2040001, 3150002, 4072901, 4073101, 4110003,
    5120003, 1250002, 1290002, 2020003, 2040002, 3150003, 4072902, 4073102,
    4140001, 1250003, 1290003, 2020005, 2040003, 3170001, 4072903, 4073103,
    4140002, 1270001, 1290005, 2030001, 3110001, 3190001, 4073001, 4080001,
    4140003, 1270002, 2010001, 2030002, 3130001, 3190002, 4073002, 4110001,
    5120001, 1270003, 2020001, 2030003, 3150001, 3190003, 4073003, 4110002,
    5120002,
];

const SERVICE_12589463: &[u32] = &[12591725, 12592618, 12593555, 12606961, 12612115];

const SERVICE_12586242: &[u32] = &[
    12564440, 12585950, 12588804, 12592425, 12592433, 12606960, 12612114,
];

const SERVICE_12586243: &[u32] = &[
    12587603, 12587604, 76030003, 76030004, 76030005, 76030006, 76030007, 76030008,
    76030009,
];

const SERVICE_12582605: &[u32] = &[12578128, 12579405, 12580055, 12593058];

const SERVICE_12582811: &[u32] = &[
    12587811, 12605114, 12606807, 12608669, 12613245, 12613246, 12613247, 12619623,
];

const SERVICE_12602802: &[u32] = &[12597120, 12613248, 12619624];

const BLACK_BOX: &[u32] = &[9355699, 9365095, 16263425];

const P04_INTEL: &[u32] = &[12202127, 12207868, 12214378, 12580147, 16243026];

const P04_AMD: &[u32] = &[12583373, 12594316, 12594535];

const P10: &[u32] = &[
    12213305, 12571911, 12575262, 12577956, 12579238, 12579357, 12584138, 12584594,
    12587430, 12587608, 12588012, 12589825, 12590965, 12595726, 12597031, 12623317,
];

const P12_1M: &[u32] = &[
    12587007, 12588651, 12589166, 12589312, 12589586, 12593533, 12597778, 12597978,
    12601774, 12601904, 12605256, 12605261, 12610624, 12623279, 12627882, 12627884,
    12631085, 12604440, 12606400, 12606374, 12606375, 12627883,
];

const P12_2M: &[u32] = &[12609805, 12611642, 12613422, 12618164, 12627885];
