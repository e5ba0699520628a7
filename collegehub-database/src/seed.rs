//! Reference data loaded into an empty store on startup.

use sea_orm::DbErr;

use crate::models::{FeesPeriod, NewCollege, NewCourse, NewExam, NewReview};
use crate::storage::Storage;

/**
 * Fill an empty store with the reference colleges, their courses, the
 * entrance exams and a few reviews. A store that already holds colleges is
 * left untouched, so a persistent database is only seeded once.
 *
 * # Arguments
 * @param storage: &dyn Storage - The store to fill
 *
 * # Returns
 * @return Result<bool, sea_orm::DbErr> - Whether anything was inserted
 */
pub async fn seed(storage: &dyn Storage) -> Result<bool, DbErr> {
    if !storage.list_colleges().await?.is_empty() {
        log::info!("Store already holds colleges, skipping seed");
        return Ok(false);
    }

    let mut college_ids = Vec::new();
    for college in colleges() {
        college_ids.push(storage.create_college(college).await?.id);
    }

    let mut course_count = 0;
    for (index, offered) in courses().into_iter().enumerate() {
        let Some(&college_id) = college_ids.get(index) else {
            break;
        };
        for (name, course_type, duration, fees, seats) in offered {
            storage
                .create_course(NewCourse {
                    college_id,
                    name: name.to_string(),
                    course_type: course_type.to_string(),
                    duration: Some(duration.to_string()),
                    fees: fees.map(str::to_string),
                    seats: Some(seats),
                    eligibility: None,
                })
                .await?;
            course_count += 1;
        }
    }

    let exam_list = exams();
    let exam_count = exam_list.len();
    for exam in exam_list {
        storage.create_exam(exam).await?;
    }

    let mut review_count = 0;
    for (index, student, course, year, rating, title, content) in reviews() {
        let Some(&college_id) = college_ids.get(index) else {
            continue;
        };
        storage
            .create_review(NewReview {
                college_id: Some(college_id),
                student_name: Some(student.to_string()),
                course: Some(course.to_string()),
                graduation_year: Some(year),
                rating: Some(rating.to_string()),
                title: Some(title.to_string()),
                content: Some(content.to_string()),
                likes: None,
                verified: Some(true),
            })
            .await?;
        review_count += 1;
    }

    log::info!(
        "Seeded {} colleges, {} courses, {} exams and {} reviews",
        college_ids.len(),
        course_count,
        exam_count,
        review_count
    );
    Ok(true)
}

fn colleges() -> Vec<NewCollege> {
    vec![
        NewCollege {
            name: "Indian Institute of Technology Delhi".to_string(),
            short_name: Some("IIT Delhi".to_string()),
            location: "New Delhi, Delhi".to_string(),
            state: "Delhi".to_string(),
            city: "New Delhi".to_string(),
            established_year: Some(1961),
            college_type: "Government".to_string(),
            affiliation: Some("IIT System".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1562774053-701939374585?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=200".to_string()),
            description: Some("Premier engineering and technology institute".to_string()),
            website: Some("https://home.iitd.ac.in/".to_string()),
            overall_rank: Some(1),
            nirf_rank: Some(2),
            fees: Some("250000".to_string()),
            fees_period: Some(FeesPeriod::Yearly),
            rating: Some("4.5".to_string()),
            review_count: Some(2100),
            admission_process: Some("JEE Advanced".to_string()),
            cutoff_score: Some(99.0),
            placement_rate: Some("95.5".to_string()),
            average_package: Some("1800000".to_string()),
            highest_package: Some("5000000".to_string()),
            hostel_fees: Some("25000".to_string()),
            has_hostel: Some(true),
        },
        NewCollege {
            name: "All India Institute of Medical Sciences".to_string(),
            short_name: Some("AIIMS Delhi".to_string()),
            location: "New Delhi, Delhi".to_string(),
            state: "Delhi".to_string(),
            city: "New Delhi".to_string(),
            established_year: Some(1956),
            college_type: "Government".to_string(),
            affiliation: Some("Ministry of Health and Family Welfare".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=200".to_string()),
            description: Some("Premier medical college and hospital".to_string()),
            website: Some("https://www.aiims.edu/".to_string()),
            overall_rank: Some(1),
            nirf_rank: Some(1),
            fees: Some("130000".to_string()),
            fees_period: Some(FeesPeriod::Yearly),
            rating: Some("4.8".to_string()),
            review_count: Some(1800),
            admission_process: Some("NEET".to_string()),
            cutoff_score: Some(98.0),
            placement_rate: Some("100".to_string()),
            average_package: Some("1200000".to_string()),
            highest_package: Some("2500000".to_string()),
            hostel_fees: Some("15000".to_string()),
            has_hostel: Some(true),
        },
        NewCollege {
            name: "Indian Institute of Management Ahmedabad".to_string(),
            short_name: Some("IIM Ahmedabad".to_string()),
            location: "Ahmedabad, Gujarat".to_string(),
            state: "Gujarat".to_string(),
            city: "Ahmedabad".to_string(),
            established_year: Some(1961),
            college_type: "Government".to_string(),
            affiliation: Some("IIM System".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1541829070764-84a7d30dd3f3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=200".to_string()),
            description: Some("Premier business school in India".to_string()),
            website: Some("https://www.iima.ac.in/".to_string()),
            overall_rank: Some(1),
            nirf_rank: Some(1),
            fees: Some("2500000".to_string()),
            fees_period: Some(FeesPeriod::Total),
            rating: Some("4.7".to_string()),
            review_count: Some(1200),
            admission_process: Some("CAT".to_string()),
            cutoff_score: Some(95.0),
            placement_rate: Some("100".to_string()),
            average_package: Some("3200000".to_string()),
            highest_package: Some("8500000".to_string()),
            hostel_fees: Some("80000".to_string()),
            has_hostel: Some(true),
        },
        NewCollege {
            name: "Indian Institute of Science Bangalore".to_string(),
            short_name: Some("IISc Bangalore".to_string()),
            location: "Bangalore, Karnataka".to_string(),
            state: "Karnataka".to_string(),
            city: "Bangalore".to_string(),
            established_year: Some(1909),
            college_type: "Government".to_string(),
            affiliation: Some("Autonomous".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1523050854058-8df90110c9d1?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=200".to_string()),
            description: Some("Premier research institute for science and engineering".to_string()),
            website: Some("https://www.iisc.ac.in/".to_string()),
            overall_rank: Some(1),
            nirf_rank: Some(1),
            fees: Some("22000".to_string()),
            fees_period: Some(FeesPeriod::Yearly),
            rating: Some("4.6".to_string()),
            review_count: Some(950),
            admission_process: Some("KVPY/JEE Advanced".to_string()),
            cutoff_score: Some(97.0),
            placement_rate: Some("85".to_string()),
            average_package: Some("2500000".to_string()),
            highest_package: Some("6000000".to_string()),
            hostel_fees: Some("18000".to_string()),
            has_hostel: Some(true),
        },
        NewCollege {
            name: "Jawaharlal Nehru University".to_string(),
            short_name: Some("JNU".to_string()),
            location: "New Delhi, Delhi".to_string(),
            state: "Delhi".to_string(),
            city: "New Delhi".to_string(),
            established_year: Some(1969),
            college_type: "Government".to_string(),
            affiliation: Some("Central University".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1607237138185-eedd9c632b0b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=200".to_string()),
            description: Some("Premier university for social sciences and liberal arts".to_string()),
            website: Some("https://www.jnu.ac.in/".to_string()),
            overall_rank: Some(2),
            nirf_rank: Some(2),
            fees: Some("25000".to_string()),
            fees_period: Some(FeesPeriod::Yearly),
            rating: Some("4.3".to_string()),
            review_count: Some(1500),
            admission_process: Some("JNU Entrance Exam".to_string()),
            cutoff_score: Some(85.0),
            placement_rate: Some("75".to_string()),
            average_package: Some("800000".to_string()),
            highest_package: Some("1500000".to_string()),
            hostel_fees: Some("12000".to_string()),
            has_hostel: Some(true),
        },
    ]
}

type SeedCourse = (&'static str, &'static str, &'static str, Option<&'static str>, i32);

/// Courses per seeded college, in the same order as `colleges()`.
fn courses() -> Vec<Vec<SeedCourse>> {
    vec![
        vec![
            ("Computer Science and Engineering", "B.Tech", "4 years", Some("250000"), 120),
            ("Electrical Engineering", "B.Tech", "4 years", Some("250000"), 100),
            ("Computer Science", "M.Tech", "2 years", Some("120000"), 60),
            ("Doctoral Programme", "PhD", "5 years", None, 40),
        ],
        vec![
            ("Bachelor of Medicine and Surgery", "MBBS", "5.5 years", Some("130000"), 125),
            ("Doctor of Medicine", "MD", "3 years", Some("150000"), 80),
            ("Doctoral Programme", "PhD", "5 years", None, 30),
        ],
        vec![
            ("Post Graduate Programme in Management", "MBA", "2 years", Some("2500000"), 395),
            ("Fellow Programme in Management", "PhD", "5 years", None, 20),
        ],
        vec![
            ("Bachelor of Science (Research)", "B.Sc", "4 years", Some("22000"), 120),
            ("Computational and Data Science", "M.Tech", "2 years", Some("35000"), 40),
            ("Doctoral Programme", "PhD", "5 years", None, 150),
        ],
        vec![
            ("Political Science", "MA", "2 years", Some("25000"), 80),
            ("Life Sciences", "M.Sc", "2 years", Some("25000"), 60),
            ("Doctoral Programme", "PhD", "5 years", None, 200),
        ],
    ]
}

fn exams() -> Vec<NewExam> {
    vec![
        NewExam {
            name: "JEE Main".to_string(),
            full_name: Some("Joint Entrance Examination Main".to_string()),
            exam_type: "Engineering".to_string(),
            conducting_body: Some("National Testing Agency".to_string()),
            frequency: Some("Bi-annual".to_string()),
            eligibility: Some("12th pass with Physics, Chemistry, Mathematics".to_string()),
            total_marks: Some(300),
            duration: Some("3 hours".to_string()),
            website: Some("https://jeemain.nta.nic.in/".to_string()),
            ..Default::default()
        },
        NewExam {
            name: "JEE Advanced".to_string(),
            full_name: Some("Joint Entrance Examination Advanced".to_string()),
            exam_type: "Engineering".to_string(),
            conducting_body: Some("IIT".to_string()),
            frequency: Some("Annual".to_string()),
            eligibility: Some("JEE Main qualified".to_string()),
            total_marks: Some(372),
            duration: Some("6 hours (2 papers)".to_string()),
            website: Some("https://jeeadv.ac.in/".to_string()),
            ..Default::default()
        },
        NewExam {
            name: "NEET".to_string(),
            full_name: Some("National Eligibility cum Entrance Test".to_string()),
            exam_type: "Medical".to_string(),
            conducting_body: Some("National Testing Agency".to_string()),
            frequency: Some("Annual".to_string()),
            eligibility: Some("12th pass with Physics, Chemistry, Biology".to_string()),
            total_marks: Some(720),
            duration: Some("3 hours".to_string()),
            website: Some("https://neet.nta.nic.in/".to_string()),
            ..Default::default()
        },
        NewExam {
            name: "CAT".to_string(),
            full_name: Some("Common Admission Test".to_string()),
            exam_type: "MBA".to_string(),
            conducting_body: Some("IIMs".to_string()),
            frequency: Some("Annual".to_string()),
            eligibility: Some("Bachelor's degree with 50% marks".to_string()),
            total_marks: Some(300),
            duration: Some("3 hours".to_string()),
            website: Some("https://iimcat.ac.in/".to_string()),
            ..Default::default()
        },
    ]
}

type SeedReview = (
    usize,
    &'static str,
    &'static str,
    i32,
    &'static str,
    &'static str,
    &'static str,
);

fn reviews() -> Vec<SeedReview> {
    vec![
        (0, "Rahul Sharma", "B.Tech", 2023, "4.5", "Rigorous and rewarding", "Faculty and labs are excellent; the workload is heavy."),
        (0, "Priya Verma", "M.Tech", 2022, "4.0", "Strong placements", "Most of my batch had offers before the final semester."),
        (1, "Ananya Iyer", "MBBS", 2021, "5.0", "Unmatched clinical exposure", "The hospital sees patients from all over the country."),
        (2, "Karan Mehta", "MBA", 2023, "4.5", "Case method done right", "Intense first year, great peer group."),
        (4, "Sneha Das", "MA", 2022, "4.0", "Vibrant campus", "Debates and discussions continue long after class."),
    ]
}
