//! Built-in sample roster.

use chrono::{DateTime, TimeZone, Utc};

use crate::api::{ClientId, CoachId};
use crate::models::booking::{Client, ClientStatus};

fn joined(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[allow(clippy::too_many_arguments)]
fn client(
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    coach_id: &str,
    status: ClientStatus,
    notes: &str,
    created_at: DateTime<Utc>,
) -> Client {
    Client {
        id: ClientId::new(id),
        name: name.to_string(),
        phone: phone.to_string(),
        email: Some(email.to_string()),
        coach_id: CoachId::new(coach_id),
        status,
        notes: Some(notes.to_string()),
        created_at,
    }
}

/// The development/test roster.
pub fn sample_roster() -> Vec<Client> {
    use ClientStatus::{Active, Inactive, Prospect};

    vec![
        client(
            "1",
            "Sarah Johnson",
            "+1-555-0101",
            "sarah.johnson@email.com",
            "coach1",
            Active,
            "Prefers morning sessions. Focus on weight loss and nutrition.",
            joined(2024, 1, 15),
        ),
        client(
            "2",
            "Michael Chen",
            "+1-555-0102",
            "michael.chen@email.com",
            "coach1",
            Active,
            "Interested in nutrition coaching and meal planning. Has food allergies.",
            joined(2024, 1, 20),
        ),
        client(
            "3",
            "Emily Rodriguez",
            "+1-555-0103",
            "emily.rodriguez@email.com",
            "coach2",
            Active,
            "Fitness enthusiast looking to improve strength training.",
            joined(2024, 2, 1),
        ),
        client(
            "4",
            "David Thompson",
            "+1-555-0104",
            "david.thompson@email.com",
            "coach1",
            Inactive,
            "On hold due to international travel.",
            joined(2024, 1, 10),
        ),
        client(
            "5",
            "Lisa Wang",
            "+1-555-0105",
            "lisa.wang@email.com",
            "coach2",
            Active,
            "Working on stress management and work-life balance.",
            joined(2024, 2, 5),
        ),
        client(
            "6",
            "James Wilson",
            "+1-555-0106",
            "james.wilson@email.com",
            "coach1",
            Prospect,
            "Initial consultation scheduled. Interested in career coaching.",
            joined(2024, 2, 10),
        ),
        client(
            "7",
            "Maria Garcia",
            "+1-555-0107",
            "maria.garcia@email.com",
            "coach2",
            Active,
            "Post-pregnancy fitness goals. Gentle approach recommended.",
            joined(2024, 1, 25),
        ),
        client(
            "8",
            "Robert Brown",
            "+1-555-0108",
            "robert.brown@email.com",
            "coach1",
            Active,
            "Recovering from knee surgery, modified exercises needed.",
            joined(2024, 1, 30),
        ),
        client(
            "9",
            "Jennifer Davis",
            "+1-555-0109",
            "jennifer.davis@email.com",
            "coach2",
            Inactive,
            "Paused coaching, may return in future.",
            joined(2024, 1, 5),
        ),
        client(
            "10",
            "Christopher Lee",
            "+1-555-0110",
            "christopher.lee@email.com",
            "coach1",
            Active,
            "High-performance athlete. Focus on advanced training techniques.",
            joined(2024, 2, 15),
        ),
        client(
            "11",
            "Amanda Martinez",
            "+1-555-0111",
            "amanda.martinez@email.com",
            "coach2",
            Prospect,
            "Interested in wellness coaching and holistic health.",
            joined(2024, 2, 20),
        ),
        client(
            "12",
            "Daniel Anderson",
            "+1-555-0112",
            "daniel.anderson@email.com",
            "coach1",
            Active,
            "Busy executive. Prefers focused sessions during lunch breaks.",
            joined(2024, 1, 12),
        ),
        client(
            "13",
            "Jessica Taylor",
            "+1-555-0113",
            "jessica.taylor@email.com",
            "coach2",
            Active,
            "Weight loss goals. Responds well to weekly progress tracking.",
            joined(2024, 1, 18),
        ),
        client(
            "14",
            "Matthew White",
            "+1-555-0114",
            "matthew.white@email.com",
            "coach1",
            Active,
            "New to fitness. Needs beginner-friendly approach.",
            joined(2024, 2, 8),
        ),
        client(
            "15",
            "Nicole Harris",
            "+1-555-0115",
            "nicole.harris@email.com",
            "coach2",
            Inactive,
            "Paused due to pregnancy. Will resume postpartum program.",
            joined(2024, 1, 22),
        ),
        client(
            "16",
            "Andrew Clark",
            "+1-555-0116",
            "andrew.clark@email.com",
            "coach1",
            Active,
            "Marathon training. Focus on endurance and injury prevention.",
            joined(2024, 2, 12),
        ),
        client(
            "17",
            "Rachel Lewis",
            "+1-555-0117",
            "rachel.lewis@email.com",
            "coach2",
            Prospect,
            "Interested in yoga and mindfulness coaching. Prefers virtual sessions.",
            joined(2024, 2, 25),
        ),
        client(
            "18",
            "Kevin Hall",
            "+1-555-0118",
            "kevin.hall@email.com",
            "coach1",
            Active,
            "Strength training focus. Working towards powerlifting goals.",
            joined(2024, 1, 28),
        ),
        client(
            "19",
            "Stephanie Young",
            "+1-555-0119",
            "stephanie.young@email.com",
            "coach2",
            Active,
            "Wellness coaching for stress management.",
            joined(2024, 2, 3),
        ),
        client(
            "20",
            "Ryan King",
            "+1-555-0120",
            "ryan.king@email.com",
            "coach1",
            Active,
            "Marathon training. Focus on speed work and race strategy.",
            joined(2024, 2, 18),
        ),
        client(
            "21",
            "Sophia Patel",
            "+1-555-0121",
            "sophia.patel@email.com",
            "coach3",
            Active,
            "Nutrition coaching for diabetes management.",
            joined(2024, 1, 8),
        ),
        client(
            "22",
            "Marcus Johnson",
            "+1-555-0122",
            "marcus.johnson@email.com",
            "coach3",
            Active,
            "Basketball player. Focus on agility and speed.",
            joined(2024, 2, 22),
        ),
        client(
            "23",
            "Isabella Rodriguez",
            "+1-555-0123",
            "isabella.rodriguez@email.com",
            "coach2",
            Prospect,
            "Interested in prenatal fitness. Needs gentle guidance.",
            joined(2024, 3, 1),
        ),
        client(
            "24",
            "Thomas Kim",
            "+1-555-0124",
            "thomas.kim@email.com",
            "coach1",
            Active,
            "CrossFit enthusiast. Working on Olympic lifting technique.",
            joined(2024, 1, 14),
        ),
        client(
            "25",
            "Olivia Thompson",
            "+1-555-0125",
            "olivia.thompson@email.com",
            "coach3",
            Active,
            "Senior fitness specialist focus on mobility and balance.",
            joined(2024, 2, 28),
        ),
    ]
}
