// Startup roster contents

use super::Activity;

/// The nine activities every roster starts from, in display order
pub(crate) fn activities() -> Vec<(&'static str, Activity)> {
    vec![
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in local leagues",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                18,
                &["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Basketball Club",
            Activity::new(
                "Practice basketball skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["liam@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Participate in school plays and improve acting skills",
                "Mondays, 4:00 PM - 5:30 PM",
                25,
                &["noah@mergington.edu", "isabella@mergington.edu"],
            ),
        ),
        (
            "Art Workshop",
            Activity::new(
                "Explore painting, drawing, and sculpture techniques",
                "Fridays, 2:00 PM - 3:30 PM",
                20,
                &["amelia@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Prepare for math competitions and solve challenging problems",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["charlotte@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Conduct experiments and explore scientific concepts",
                "Wednesdays, 4:00 PM - 5:00 PM",
                20,
                &["harper@mergington.edu", "jackson@mergington.edu"],
            ),
        ),
    ]
}
