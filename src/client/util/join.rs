//! Display joins for list pages that combine several collections by id.

use std::collections::HashMap;

use crate::model::{
    activity::ActivityDto, enrollment::EnrollmentDto, payment::PaymentDto, student::StudentDto,
};

/// One enrollment with the names it refers to resolved
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentRow {
    pub enrollment: EnrollmentDto,
    pub activity_name: String,
    pub student_name: String,
    /// Cost of the activity per student, `0.0` when the activity is unknown
    pub cost: f64,
}

impl EnrollmentRow {
    /// Amount still owed for this enrollment
    pub fn outstanding(&self) -> f64 {
        (self.cost - self.enrollment.monto_pagado).max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRow {
    pub payment: PaymentDto,
    pub activity_name: String,
    pub student_name: String,
}

/// Shown in place of a name whose record was not returned by the API
pub const UNKNOWN_NAME: &str = "Desconocido";

/// Indexes a collection by the id `key` extracts
pub fn index_by<'a, T>(items: &'a [T], key: impl Fn(&T) -> &str) -> HashMap<&'a str, &'a T> {
    items.iter().map(|item| (key(item), item)).collect()
}

pub fn join_enrollments(
    enrollments: &[EnrollmentDto],
    activities: &[ActivityDto],
    students: &[StudentDto],
) -> Vec<EnrollmentRow> {
    let activities = index_by(activities, |activity| &activity.id);
    let students = index_by(students, |student| &student.id);

    enrollments
        .iter()
        .map(|enrollment| {
            let activity = activities.get(enrollment.actividad_id.as_str());

            EnrollmentRow {
                enrollment: enrollment.clone(),
                activity_name: activity
                    .map(|activity| activity.nombre.clone())
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                student_name: students
                    .get(enrollment.estudiante_id.as_str())
                    .map(|student| student.nombre_completo.clone())
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                cost: activity.map(|activity| activity.costo_estudiante).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Resolves each payment through its enrollment to the activity and student
pub fn join_payments(
    payments: &[PaymentDto],
    enrollments: &[EnrollmentDto],
    activities: &[ActivityDto],
    students: &[StudentDto],
) -> Vec<PaymentRow> {
    let enrollments = index_by(enrollments, |enrollment| &enrollment.id);
    let activities = index_by(activities, |activity| &activity.id);
    let students = index_by(students, |student| &student.id);

    payments
        .iter()
        .map(|payment| {
            let enrollment = enrollments.get(payment.inscripcion_id.as_str());

            let activity_name = enrollment
                .and_then(|enrollment| activities.get(enrollment.actividad_id.as_str()))
                .map(|activity| activity.nombre.clone())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string());

            let student_name = enrollment
                .and_then(|enrollment| students.get(enrollment.estudiante_id.as_str()))
                .map(|student| student.nombre_completo.clone())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string());

            PaymentRow {
                payment: payment.clone(),
                activity_name,
                student_name,
            }
        })
        .collect()
}
