// src/quiz/bank.rs

use crate::models::question::{Question, QuestionSet};

fn q(id: &str, question: &str, options: &[&str], answer_index: usize) -> Question {
    Question {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        answer_index,
    }
}

/// The fixed question bank served whenever no Gemini key is configured or
/// generation fails: 10 questions per section, ids q1-q10, l1-l10, v1-v10.
pub fn fallback_bank() -> QuestionSet {
    QuestionSet {
        quantitative: vec![
            q(
                "q1",
                "A shopkeeper sells an item at 20% profit. If the cost price is ₹500, what is the selling price?",
                &["₹600", "₹550", "₹625", "₹580"],
                0,
            ),
            q(
                "q2",
                "If 3x + 5 = 20, what is the value of x?",
                &["3", "4", "5", "6"],
                2,
            ),
            q(
                "q3",
                "A train 150m long passes a pole in 10 seconds. What is the speed of the train in km/h?",
                &["45 km/h", "54 km/h", "60 km/h", "72 km/h"],
                1,
            ),
            q(
                "q4",
                "If the area of a circle is 154 cm², what is its radius? (Take π = 22/7)",
                &["5 cm", "6 cm", "7 cm", "8 cm"],
                2,
            ),
            q(
                "q5",
                "A number when divided by 7 gives a quotient of 12 and remainder 5. What is the number?",
                &["84", "89", "91", "96"],
                1,
            ),
            q(
                "q6",
                "If 25% of a number is 75, what is 40% of that number?",
                &["100", "120", "150", "180"],
                1,
            ),
            q(
                "q7",
                "The sum of three consecutive even numbers is 54. What is the largest number?",
                &["16", "18", "20", "22"],
                2,
            ),
            q(
                "q8",
                "If a person walks at 6 km/h, how long will it take to cover 4.5 km?",
                &["40 minutes", "45 minutes", "50 minutes", "55 minutes"],
                1,
            ),
            q(
                "q9",
                "A rectangle has length 12 cm and width 8 cm. What is the area of a square with the same perimeter?",
                &["64 cm²", "81 cm²", "100 cm²", "121 cm²"],
                2,
            ),
            q(
                "q10",
                "If 2^5 × 3^2 = ?",
                &["144", "192", "288", "324"],
                2,
            ),
        ],
        logical: vec![
            q(
                "l1",
                "In a code, CAT is written as 3120. How is DOG written in that code?",
                &["4157", "4156", "4158", "4159"],
                0,
            ),
            q(
                "l2",
                "If all roses are flowers and some flowers are red, which statement must be true?",
                &[
                    "All roses are red",
                    "Some roses are red",
                    "No roses are red",
                    "Cannot be determined",
                ],
                3,
            ),
            q(
                "l3",
                "What comes next: 2, 6, 12, 20, 30, ?",
                &["40", "42", "44", "46"],
                1,
            ),
            q(
                "l4",
                "If Monday is the first day, what day will it be after 25 days?",
                &["Thursday", "Friday", "Saturday", "Sunday"],
                1,
            ),
            q(
                "l5",
                "A is taller than B, C is shorter than A. Who is the tallest?",
                &["A", "B", "C", "Cannot be determined"],
                0,
            ),
            q(
                "l6",
                "In a row, Priya is 15th from the left and 20th from the right. How many people are in the row?",
                &["33", "34", "35", "36"],
                1,
            ),
            q(
                "l7",
                "If 5 × 3 = 15, 7 × 4 = 28, then 9 × 6 = ?",
                &["45", "54", "63", "72"],
                1,
            ),
            q(
                "l8",
                "Complete the series: Z, Y, X, W, V, ?",
                &["U", "T", "S", "R"],
                0,
            ),
            q(
                "l9",
                "If all doctors are professionals and some professionals are teachers, which is true?",
                &[
                    "All doctors are teachers",
                    "Some doctors are teachers",
                    "No doctors are teachers",
                    "Cannot be determined",
                ],
                3,
            ),
            q(
                "l10",
                "Find the odd one out: 8, 27, 64, 100, 125",
                &["8", "27", "100", "125"],
                2,
            ),
        ],
        verbal: vec![
            q(
                "v1",
                "Choose the correct synonym for 'Benevolent':",
                &["Cruel", "Kind", "Strict", "Lazy"],
                1,
            ),
            q(
                "v2",
                "Fill in the blank: She is the _____ student in the class.",
                &["good", "better", "best", "well"],
                2,
            ),
            q(
                "v3",
                "Identify the error: 'Neither of the students were present.'",
                &[
                    "No error",
                    "were should be was",
                    "students should be student",
                    "present should be presence",
                ],
                1,
            ),
            q(
                "v4",
                "Choose the correct meaning of 'Procrastinate':",
                &[
                    "To do immediately",
                    "To delay or postpone",
                    "To complete quickly",
                    "To organize",
                ],
                1,
            ),
            q(
                "v5",
                "Select the correctly spelled word:",
                &["Accomodate", "Accommodate", "Acommodate", "Acomodate"],
                1,
            ),
            q(
                "v6",
                "Choose the appropriate preposition: 'She is allergic _____ peanuts.'",
                &["to", "for", "with", "at"],
                0,
            ),
            q(
                "v7",
                "What is the antonym of 'Abundant'?",
                &["Plentiful", "Scarce", "Many", "Rich"],
                1,
            ),
            q(
                "v8",
                "Identify the figure of speech: 'The wind whispered through the trees.'",
                &["Simile", "Metaphor", "Personification", "Alliteration"],
                2,
            ),
            q(
                "v9",
                "Choose the correct form: 'I wish I _____ harder for the exam.'",
                &["study", "studied", "had studied", "will study"],
                2,
            ),
            q(
                "v10",
                "What does 'Eloquent' mean?",
                &[
                    "Unable to speak",
                    "Fluent and persuasive in speaking",
                    "Quiet and shy",
                    "Rude and impolite",
                ],
                1,
            ),
        ],
    }
}
