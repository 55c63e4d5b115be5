//! Lupon case file printout.

use crate::model::blotter::{CaseRecord, CaseStatus};
use crate::render::{long_date, Letterhead, PrintJob, PrintSubject};

const CASE_FILE_STYLE: &str = "body { font-family: 'Times New Roman', Times, serif; margin: 40px; color: #000; }\n\
.header { text-align: center; line-height: 1.2; }\n\
.header p { margin: 0; }\n\
.title { font-weight: bold; font-size: 1.2em; margin-top: 20px; margin-bottom: 20px; }\n\
.case-details { margin-top: 30px; }\n\
.case-details table { width: 100%; border-collapse: collapse; }\n\
.case-details td { padding: 8px; vertical-align: top; }\n\
.case-details td:first-child { font-weight: bold; width: 150px; }\n\
.section { margin-top: 20px; }\n\
.section h3 { font-weight: bold; text-transform: uppercase; border-bottom: 1px solid black; padding-bottom: 4px; margin-bottom: 10px; }\n\
.narrative { text-align: justify; text-indent: 40px; margin-top: 10px; line-height: 1.5; }\n\
.footer { margin-top: 80px; }\n\
.footer p { margin: 0; }";

const NO_ACTION_RECORDED: &str = "No action recorded yet.";

/// Renders the full case file for `record`.
///
/// The settlement section appears only for amicably settled cases that
/// carry settlement details.
pub fn render_case_file(record: &CaseRecord, letterhead: &Letterhead) -> PrintJob {
    let case = &record.data;
    let title = format!("Case File: {}", case.case_number);

    let mut sections = vec![
        section(
            &format!("Complaint: {}", case.nature_of_complaint),
            &format!(
                "<p class=\"narrative\">{}</p>",
                case.narrative.replace('\n', "<br>")
            ),
        ),
        section(
            "Action Taken:",
            &format!(
                "<p>{}</p>",
                case.action_taken
                    .as_deref()
                    .filter(|action| !action.is_empty())
                    .unwrap_or(NO_ACTION_RECORDED)
            ),
        ),
    ];
    if case.status == CaseStatus::Settled {
        if let Some(details) = case.settlement_details.as_deref().filter(|d| !d.is_empty()) {
            sections.push(section("Amicable Settlement:", &format!("<p>{details}</p>")));
        }
    }
    sections.push(section(
        "Status:",
        &format!("<p><strong>{}</strong></p>", case.status.label()),
    ));

    let markup = format!(
        "<html>\n<head>\n<title>{title}</title>\n<style>\n{CASE_FILE_STYLE}\n</style>\n</head>\n<body>\n\
         <div class=\"header\">\n{header}\n<p class=\"title\">OFFICE OF THE LUPONG TAGAPAMAYAPA</p>\n</div>\n\
         <div class=\"case-details\">\n<table>\n\
         <tr><td>CASE NO.:</td><td><strong>{number}</strong></td></tr>\n\
         <tr><td>COMPLAINANT:</td><td>{complainant}</td></tr>\n\
         <tr><td>RESPONDENT:</td><td>{respondent}</td></tr>\n\
         <tr><td>DATE FILED:</td><td>{filed}</td></tr>\n\
         </table>\n</div>\n\
         {sections}\n\
         <div class=\"footer\">\n<p>Prepared by:</p>\n<br/><br/><br/>\n\
         <p>_________________________</p>\n<p>Barangay Secretary / Lupon Secretary</p>\n</div>\n\
         </body>\n</html>\n",
        header = letterhead.header_lines(),
        number = case.case_number,
        complainant = case.complainant,
        respondent = case.respondent,
        filed = long_date(case.date_filed),
        sections = sections.join("\n"),
    );

    PrintJob {
        subject: PrintSubject::CaseFile,
        title,
        markup,
    }
}

fn section(heading: &str, body: &str) -> String {
    format!("<div class=\"section\">\n<h3>{heading}</h3>\n{body}\n</div>")
}

#[cfg(test)]
mod tests {
    use super::render_case_file;
    use crate::model::blotter::CaseStatus;
    use crate::render::{Letterhead, PrintSubject};
    use crate::seed;

    #[test]
    fn settled_case_includes_settlement_section() {
        let case = &seed::cases()[0];
        let job = render_case_file(case, &Letterhead::default());

        assert_eq!(job.subject, PrintSubject::CaseFile);
        assert_eq!(job.title, "Case File: BMS-2023-001");
        assert!(job.markup.contains("<td><strong>BMS-2023-001</strong></td>"));
        assert!(job.markup.contains("<td>November 1, 2023</td>"));
        assert!(job.markup.contains("<h3>Complaint: Unpaid Debt</h3>"));
        assert!(job.markup.contains("<h3>Amicable Settlement:</h3>"));
        assert!(job.markup.contains("<strong>Amicably Settled</strong>"));
        assert!(job.markup.contains("OFFICE OF THE LUPONG TAGAPAMAYAPA"));
    }

    #[test]
    fn settlement_section_is_omitted_for_other_statuses() {
        let mut case = seed::cases().remove(0);
        case.data.status = CaseStatus::Dismissed;
        let job = render_case_file(&case, &Letterhead::default());
        assert!(!job.markup.contains("Amicable Settlement"));
        assert!(job.markup.contains("<strong>Dismissed</strong>"));
    }

    #[test]
    fn narrative_newlines_become_breaks_and_missing_action_has_placeholder() {
        let mut case = seed::cases().remove(1);
        case.data.narrative = "First line\nSecond line".to_string();
        case.data.action_taken = None;
        let job = render_case_file(&case, &Letterhead::default());

        assert!(job.markup.contains("First line<br>Second line"));
        assert!(job.markup.contains("<p>No action recorded yet.</p>"));
    }
}
