// ABOUTME: Static measurement catalog - the seven assessment groups and their definitions
// ABOUTME: Built at compile time; order here is the display order of forms and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MeasurementDefinition as Def, MeasurementGroup};
use crate::constants::groups;
use crate::constants::measurements::{HEIGHT, SUBSCAPULAR, SUPRAILIAC, TRICEPS, WEIGHT};
use crate::constants::units::{
    BEATS_PER_MINUTE, CENTIMETERS, KILOCALORIES, KILOGRAMS, LEVEL, METERS, MILLIMETERS,
    ML_PER_KG_PER_MIN, PERCENT, REPETITIONS, SECONDS,
};

const BODY_MEASUREMENTS: &[Def] = &[
    Def::numeric(WEIGHT, KILOGRAMS),
    Def::numeric(HEIGHT, CENTIMETERS),
    Def::numeric("Chest", CENTIMETERS),
    Def::numeric("Waist", CENTIMETERS),
    Def::numeric("Abdomen", CENTIMETERS),
    Def::numeric("Hip", CENTIMETERS),
    Def::numeric("Right Arm", CENTIMETERS),
    Def::numeric("Left Arm", CENTIMETERS),
    Def::numeric("Right Forearm", CENTIMETERS),
    Def::numeric("Left Forearm", CENTIMETERS),
    Def::numeric("Right Thigh", CENTIMETERS),
    Def::numeric("Left Thigh", CENTIMETERS),
    Def::numeric("Right Calf", CENTIMETERS),
    Def::numeric("Left Calf", CENTIMETERS),
];

const SKINFOLDS: &[Def] = &[
    Def::numeric(TRICEPS, MILLIMETERS),
    Def::numeric(SUBSCAPULAR, MILLIMETERS),
    Def::numeric(SUPRAILIAC, MILLIMETERS),
    Def::numeric("Abdominal", MILLIMETERS),
    Def::numeric("Thigh", MILLIMETERS),
    Def::numeric("Chest", MILLIMETERS),
    Def::numeric("Midaxillary", MILLIMETERS),
    Def::numeric("Biceps", MILLIMETERS),
];

const BODY_COMPOSITION: &[Def] = &[
    Def::numeric("Body Fat", PERCENT),
    Def::numeric("Lean Mass", KILOGRAMS),
    Def::numeric("Fat Mass", KILOGRAMS),
    Def::numeric("Visceral Fat", LEVEL),
    Def::numeric("Basal Metabolic Rate", KILOCALORIES),
    Def::numeric("Body Water", PERCENT),
];

const POSTURAL_ASSESSMENT: &[Def] = &[
    Def::free_text("Head"),
    Def::free_text("Shoulders"),
    Def::free_text("Spine"),
    Def::free_text("Pelvis"),
    Def::free_text("Knees"),
    Def::free_text("Feet"),
    Def::free_text("Observations"),
];

const FLEXIBILITY: &[Def] = &[
    Def::numeric("Sit and Reach", CENTIMETERS),
    Def::free_text("Shoulder Mobility"),
    Def::free_text("Hip Mobility"),
];

const STRENGTH_TESTS: &[Def] = &[
    Def::numeric("Push-ups", REPETITIONS),
    Def::numeric("Sit-ups", REPETITIONS),
    Def::numeric("Handgrip", KILOGRAMS),
    Def::numeric("Bench Press 1RM", KILOGRAMS),
    Def::numeric("Squat 1RM", KILOGRAMS),
    Def::numeric("Plank", SECONDS),
];

const CARDIOVASCULAR_TESTS: &[Def] = &[
    Def::numeric("Resting Heart Rate", BEATS_PER_MINUTE),
    Def::free_text("Blood Pressure"),
    Def::numeric("VO2max", ML_PER_KG_PER_MIN),
    Def::numeric("Cooper Test", METERS),
];

pub(super) const CATALOG: &[MeasurementGroup] = &[
    MeasurementGroup {
        name: groups::BODY_MEASUREMENTS,
        definitions: BODY_MEASUREMENTS,
    },
    MeasurementGroup {
        name: groups::SKINFOLDS,
        definitions: SKINFOLDS,
    },
    MeasurementGroup {
        name: groups::BODY_COMPOSITION,
        definitions: BODY_COMPOSITION,
    },
    MeasurementGroup {
        name: groups::POSTURAL_ASSESSMENT,
        definitions: POSTURAL_ASSESSMENT,
    },
    MeasurementGroup {
        name: groups::FLEXIBILITY,
        definitions: FLEXIBILITY,
    },
    MeasurementGroup {
        name: groups::STRENGTH_TESTS,
        definitions: STRENGTH_TESTS,
    },
    MeasurementGroup {
        name: groups::CARDIOVASCULAR_TESTS,
        definitions: CARDIOVASCULAR_TESTS,
    },
];
