//! Certificates and permits issued from document records.

use crate::model::document::{DocumentRecord, DocumentType};
use crate::render::{long_date, Letterhead, PrintJob, PrintSubject};

const DOCUMENT_STYLE: &str = "body { font-family: 'Times New Roman', Times, serif; margin: 0; padding: 2rem; color: #000; }\n\
.print-container { max-width: 8.5in; width: 100%; margin: 0 auto; }\n\
.header { text-align: center; line-height: 1.2; margin-bottom: 3rem; }\n\
.header p { margin: 0; }\n\
.document-title { font-weight: bold; font-size: 1.5rem; margin: 2rem 0; text-align: center; text-transform: uppercase; }\n\
.salutation { margin-top: 2rem; }\n\
.body-text, .issued-text { text-indent: 40px; text-align: justify; line-height: 1.8; font-size: 1.1rem; }\n\
.issued-text { margin-top: 2rem; }\n\
.footer { margin-top: 5rem; text-align: right; }\n\
.signature-line { font-weight: bold; text-transform: uppercase; }\n\
@media print { body { padding: 0.5in; } }";

/// Renders the certificate or permit for `record`, dated by its issuance time.
pub fn render_document(record: &DocumentRecord, letterhead: &Letterhead) -> PrintJob {
    let document = &record.data;
    let title = format!(
        "{} - {}",
        document.document_type.label(),
        document.resident_name
    );

    let markup = format!(
        "<html>\n<head>\n<title>{title}</title>\n<style>\n{DOCUMENT_STYLE}\n</style>\n</head>\n<body>\n\
         <div class=\"print-container\">\n\
         <div class=\"header\">\n{header}\n<br/>\n<p><strong>OFFICE OF THE BARANGAY CAPTAIN</strong></p>\n</div>\n\
         {content}\n\
         <div class=\"footer\">\n<p>_________________________</p>\n\
         <p class=\"signature-line\">{captain}</p>\n<p>Barangay Captain</p>\n</div>\n\
         </div>\n</body>\n</html>\n",
        header = letterhead.header_lines(),
        content = document_content(record, letterhead),
        captain = letterhead.captain,
    );

    PrintJob {
        subject: PrintSubject::Document,
        title,
        markup,
    }
}

fn document_content(record: &DocumentRecord, letterhead: &Letterhead) -> String {
    let document = &record.data;
    let name = document.resident_name.to_uppercase();
    let purpose = &document.purpose;
    let locality = letterhead.locality();
    let issued = format!(
        "<p class=\"issued-text\">Issued this {} at {locality}.</p>",
        long_date(record.created_at)
    );

    let (heading, paragraphs) = match document.document_type {
        DocumentType::BarangayClearance => (
            "BARANGAY CLEARANCE",
            [
                format!(
                    "This is to certify that <strong>{name}</strong>, of legal age, Filipino, and a bonafide \
                     resident of this barangay, is a person of good moral character and has no derogatory \
                     record on file in this office."
                ),
                format!(
                    "This clearance is issued upon the request of the above-named person for the purpose of \
                     <strong>{purpose}</strong> and for whatever legal purpose it may serve."
                ),
            ],
        ),
        DocumentType::CertificateOfResidency => (
            "CERTIFICATE OF RESIDENCY",
            [
                format!(
                    "This is to certify that <strong>{name}</strong>, of legal age, is a permanent resident \
                     of {locality}."
                ),
                format!(
                    "This certification is issued upon the request of the interested party for \
                     <strong>{purpose}</strong>."
                ),
            ],
        ),
        DocumentType::BusinessPermit => (
            "BARANGAY PERMIT TO OPERATE BUSINESS",
            [
                format!(
                    "Permission is hereby granted to <strong>{name}</strong> to operate a business known as \
                     <strong>\"{purpose}\"</strong> located within the jurisdiction of this barangay."
                ),
                "This permit is issued in accordance with the provisions of the Local Government Code of \
                 1991 and is subject to all existing laws, rules, and regulations. This permit is valid \
                 until the end of the current fiscal year and must be renewed annually."
                    .to_string(),
            ],
        ),
    };

    let body = paragraphs
        .iter()
        .map(|text| format!("<p class=\"body-text\">{text}</p>"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<h2 class=\"document-title\">{heading}</h2>\n\
         <p class=\"salutation\">TO WHOM IT MAY CONCERN:</p>\n\
         {body}\n{issued}"
    )
}

#[cfg(test)]
mod tests {
    use super::render_document;
    use crate::model::document::DocumentType;
    use crate::render::{Letterhead, PrintSubject};
    use crate::seed;
    use chrono::{TimeZone, Utc};

    #[test]
    fn clearance_uses_uppercased_name_and_issue_date() {
        let now = Utc.with_ymd_and_hms(2023, 11, 15, 8, 0, 0).unwrap();
        let clearance = &seed::documents(now)[0];
        let job = render_document(clearance, &Letterhead::default());

        assert_eq!(job.subject, PrintSubject::Document);
        assert_eq!(job.title, "Barangay Clearance - Juan Dela Cruz");
        assert!(job.markup.contains("BARANGAY CLEARANCE"));
        assert!(job.markup.contains("<strong>JUAN DELA CRUZ</strong>"));
        assert!(job.markup.contains("<strong>For local employment</strong>"));
        assert!(job
            .markup
            .contains("Issued this October 15, 2023 at Barangay Dumlog, Talisay City, Cebu."));
        assert!(job.markup.contains("Cmdr. Alex Reyes"));
    }

    #[test]
    fn template_follows_document_type() {
        let now = Utc.with_ymd_and_hms(2023, 11, 15, 8, 0, 0).unwrap();
        let mut record = seed::documents(now).remove(2);
        let permit = render_document(&record, &Letterhead::default());
        assert!(permit.markup.contains("BARANGAY PERMIT TO OPERATE BUSINESS"));
        assert!(permit.markup.contains("<strong>\"Sari-sari store\"</strong>"));
        assert!(permit.markup.contains("November 15, 2023"));

        record.data.document_type = DocumentType::CertificateOfResidency;
        let residency = render_document(&record, &Letterhead::default());
        assert!(residency.markup.contains("CERTIFICATE OF RESIDENCY"));
        assert!(residency
            .markup
            .contains("is a permanent resident of Barangay Dumlog, Talisay City, Cebu."));
    }

    #[test]
    fn letterhead_fields_flow_into_header_and_signature() {
        let letterhead = Letterhead {
            province: "Bohol".to_string(),
            city: "Tagbilaran".to_string(),
            barangay: "Cogon".to_string(),
            captain: "Hon. Ana Lim".to_string(),
        };
        let record = &seed::documents(Utc::now())[0];
        let job = render_document(record, &letterhead);

        assert!(job.markup.contains("<p>Province of Bohol</p>"));
        assert!(job.markup.contains("<strong>BARANGAY COGON</strong>"));
        assert!(job.markup.contains("Hon. Ana Lim"));
        assert!(job.markup.contains("at Barangay Cogon, Tagbilaran City, Bohol."));
    }
}
