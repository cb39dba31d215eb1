use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::{CalendarEvent, SlotCategory, TimeSlot};

pub const SAMPLE_SEMESTER_START: (i32, u32, u32) = (2024, 8, 26);

struct SlotRow {
    id: &'static str,
    course_code: &'static str,
    course_name: &'static str,
    day_of_week: u8,
    start: &'static str,
    end: &'static str,
    room: &'static str,
    students: u32,
    category: SlotCategory,
    year_group: Option<&'static str>,
    materials_uploaded: bool,
    has_upcoming_assignment: bool,
    new_questions: u32,
    color: &'static str,
}

const SLOT_ROWS: &[SlotRow] = &[
    SlotRow {
        id: "cs101-mon",
        course_code: "CS 101",
        course_name: "Introduction to Computer Science",
        day_of_week: 1,
        start: "09:00",
        end: "10:30",
        room: "Science Hall 120",
        students: 45,
        category: SlotCategory::Lecture,
        year_group: Some("Year 1"),
        materials_uploaded: true,
        has_upcoming_assignment: true,
        new_questions: 3,
        color: "blue",
    },
    SlotRow {
        id: "math202-mon",
        course_code: "MATH 202",
        course_name: "Calculus II",
        day_of_week: 1,
        start: "11:00",
        end: "12:00",
        room: "Math Building 210",
        students: 38,
        category: SlotCategory::Lecture,
        year_group: Some("Year 2"),
        materials_uploaded: true,
        has_upcoming_assignment: false,
        new_questions: 0,
        color: "purple",
    },
    SlotRow {
        id: "phys301-tue",
        course_code: "PHYS 301",
        course_name: "Modern Physics",
        day_of_week: 2,
        start: "09:00",
        end: "10:30",
        room: "Physics Lab 3",
        students: 32,
        category: SlotCategory::Lecture,
        year_group: Some("Year 3"),
        materials_uploaded: false,
        has_upcoming_assignment: true,
        new_questions: 5,
        color: "green",
    },
    SlotRow {
        id: "cs250-tue",
        course_code: "CS 250",
        course_name: "Data Structures & Algorithms",
        day_of_week: 2,
        start: "13:00",
        end: "14:30",
        room: "Engineering 301",
        students: 41,
        category: SlotCategory::Lab,
        year_group: Some("Year 2"),
        materials_uploaded: true,
        has_upcoming_assignment: false,
        new_questions: 1,
        color: "indigo",
    },
    SlotRow {
        id: "cs101-wed",
        course_code: "CS 101",
        course_name: "Introduction to Computer Science",
        day_of_week: 3,
        start: "09:00",
        end: "10:30",
        room: "Science Hall 120",
        students: 45,
        category: SlotCategory::Lecture,
        year_group: Some("Year 1"),
        materials_uploaded: false,
        has_upcoming_assignment: true,
        new_questions: 0,
        color: "blue",
    },
    SlotRow {
        id: "lit150-wed",
        course_code: "LIT 150",
        course_name: "World Literature",
        day_of_week: 3,
        start: "14:00",
        end: "15:30",
        room: "Humanities 105",
        students: 50,
        category: SlotCategory::Seminar,
        year_group: Some("Year 1"),
        materials_uploaded: true,
        has_upcoming_assignment: false,
        new_questions: 2,
        color: "orange",
    },
    SlotRow {
        id: "math202-thu",
        course_code: "MATH 202",
        course_name: "Calculus II",
        day_of_week: 4,
        start: "11:00",
        end: "12:00",
        room: "Math Building 210",
        students: 38,
        category: SlotCategory::Tutorial,
        year_group: Some("Year 2"),
        materials_uploaded: true,
        has_upcoming_assignment: true,
        new_questions: 4,
        color: "purple",
    },
    SlotRow {
        id: "office-hours-thu",
        course_code: "CS 101",
        course_name: "Introduction to Computer Science",
        day_of_week: 4,
        start: "15:00",
        end: "16:00",
        room: "Office 4.12",
        students: 0,
        category: SlotCategory::OfficeHours,
        year_group: None,
        materials_uploaded: false,
        has_upcoming_assignment: false,
        new_questions: 0,
        color: "gray",
    },
    SlotRow {
        id: "cs250-fri",
        course_code: "CS 250",
        course_name: "Data Structures & Algorithms",
        day_of_week: 5,
        start: "10:00",
        end: "11:30",
        room: "Engineering 301",
        students: 41,
        category: SlotCategory::Lecture,
        year_group: Some("Year 2"),
        materials_uploaded: true,
        has_upcoming_assignment: true,
        new_questions: 0,
        color: "indigo",
    },
    SlotRow {
        id: "phys301-fri",
        course_code: "PHYS 301",
        course_name: "Modern Physics",
        day_of_week: 5,
        start: "13:00",
        end: "15:00",
        room: "Physics Lab 3",
        students: 32,
        category: SlotCategory::Lab,
        year_group: Some("Year 3"),
        materials_uploaded: false,
        has_upcoming_assignment: false,
        new_questions: 1,
        color: "green",
    },
];

const EVENT_ROWS: &[(u32, &str, &str, &str)] = &[
    (3, "Computer Science Assignment Due", "23:59", "blue"),
    (5, "Mathematics Quiz", "14:00", "purple"),
    (10, "Physics Lab Report Due", "17:00", "green"),
    (15, "Literature Essay Submission", "23:59", "orange"),
    (18, "Final Exam - Data Structures", "09:00", "red"),
    (20, "Final Exam - Calculus", "13:00", "red"),
];

pub fn sample_slots() -> Result<Vec<TimeSlot>, AppError> {
    SLOT_ROWS
        .iter()
        .map(|row| -> Result<TimeSlot, AppError> {
            Ok(TimeSlot {
                id: row.id.to_string(),
                course_code: row.course_code.to_string(),
                course_name: row.course_name.to_string(),
                day_of_week: row.day_of_week,
                start_time: row.start.parse()?,
                end_time: row.end.parse()?,
                room: row.room.to_string(),
                students: row.students,
                category: row.category,
                year_group: row.year_group.map(str::to_string),
                materials_uploaded: row.materials_uploaded,
                has_upcoming_assignment: row.has_upcoming_assignment,
                new_questions: row.new_questions,
                color: row.color.to_string(),
            })
        })
        .collect()
}

/// December 2024 deadlines and exams.
pub fn sample_events() -> Result<Vec<CalendarEvent>, AppError> {
    EVENT_ROWS
        .iter()
        .map(|(day, title, time, color)| -> Result<CalendarEvent, AppError> {
            let date = NaiveDate::from_ymd_opt(2024, 12, *day)
                .ok_or_else(|| AppError::InvalidDate(format!("2024-12-{}", day)))?;
            Ok(CalendarEvent {
                date,
                title: title.to_string(),
                time: time.parse()?,
                color: color.to_string(),
            })
        })
        .collect()
}
