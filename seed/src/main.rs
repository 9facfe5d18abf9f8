use std::path::Path;

use catalog::model::{Catalog, Category, Combination, Technology};
use catalog::store::write_catalog;

fn tech(
    name: &str,
    category: Category,
    display_order: u32,
    vacancies: u32,
    top_companies: &str,
) -> Technology {
    Technology {
        name: name.to_string(),
        category,
        display_order,
        vacancies,
        fresher_package: "3-5 LPA".to_string(),
        experienced_package: "8-15 LPA".to_string(),
        top_companies: top_companies.to_string(),
        popularity_score: 8,
        description: String::new(),
    }
}

fn main() {
    let catalog = Catalog {
        technologies: vec![
            tech("HTML5", Category::Main, 1, 3000, "TCS, Wipro, Infosys"),
            tech("CSS3", Category::Sub, 2, 2000, "TCS, Accenture"),
            tech("JavaScript", Category::Main, 3, 8000, "Amazon, Flipkart, TCS"),
            tech("React.js", Category::Main, 4, 6000, "Amazon, Swiggy, Zomato"),
            tech("Node.js", Category::Main, 5, 5000, "PayPal, Walmart, LinkedIn"),
            tech(
                "Python Core",
                Category::Main,
                6,
                9000,
                "Amazon, Google, Infosys, Capgemini, Cognizant",
            ),
        ],
        combinations: vec![Combination {
            technologies: vec![
                "HTML5".to_string(),
                "CSS3".to_string(),
                "JavaScript".to_string(),
            ],
            job_role: "Frontend Developer".to_string(),
            category: "web".to_string(),
            vacancies: 13000,
            fresher_package: "3-6 LPA".to_string(),
            experienced_package: "10-18 LPA".to_string(),
            top_companies: "TCS, Wipro, Infosys, Accenture".to_string(),
            popularity_score: 10,
        }],
    };

    write_catalog(Path::new("catalog.json"), &catalog).unwrap();

    println!("Technologies written: {}", catalog.technologies.len());
    println!("Combinations written: {}", catalog.combinations.len());
}
