//! Synthetic token streams laid out like the official forms.
#![allow(dead_code)]

use bankform::{RawPage, RawToken};

const TOP: f32 = 760.0;
const STEP: f32 = 14.0;

/// Builds pages line by line, top to bottom.
pub struct PageBuilder {
    pages: Vec<RawPage>,
    y: f32,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            pages: vec![RawPage::new(1)],
            y: TOP,
        }
    }

    /// Add one line of tokens at the given x positions.
    pub fn line(mut self, tokens: &[(&str, f32)]) -> Self {
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.tokens
                .extend(tokens.iter().map(|(text, x)| RawToken::new(*text, *x, y)));
        }
        self.y -= STEP;
        self
    }

    /// Add a single-token line at the left margin.
    pub fn text(self, text: &str) -> Self {
        self.line(&[(text, 36.0)])
    }

    /// Add one checkbox line per option, the box at `x` and its text after it.
    pub fn boxes(self, x: f32, options: &[(&str, bool)]) -> Self {
        options.iter().fold(self, |builder, (text, checked)| {
            let glyph = if *checked { "☒" } else { "☐" };
            builder.line(&[(glyph, x), (text, x + 14.0)])
        })
    }

    /// Close the page with its footer and start the next one.
    pub fn new_page(mut self) -> Self {
        let number = self.pages.len() as u32 + 1;
        self.pages.push(RawPage::new(number));
        self.y = TOP;
        self
    }

    pub fn build(self) -> Vec<RawPage> {
        self.pages
    }
}

/// Caption block shared by all schedules.
pub fn caption(builder: PageBuilder, form: &str, title: &str) -> PageBuilder {
    let form_line = format!("Official Form {}", form);
    builder
        .text("Fill in this information to identify your case:")
        .line(&[("Debtor 1", 36.0), ("John Q. Smith", 120.0)])
        .line(&[("Debtor 2", 36.0), ("Mary Smith", 120.0)])
        .text("United States Bankruptcy Court for the: Northern District of Illinois")
        .line(&[("Case number", 36.0), ("19-31415", 120.0)])
        .line(&[("☐", 36.0), ("Check if this is an amended filing", 50.0)])
        .text(&form_line)
        .text(title)
}

/// Footer closing a page.
pub fn footer(builder: PageBuilder, form: &str, page: u32) -> PageBuilder {
    let form_line = format!("Official Form {}", form);
    let page_line = format!("Page {} of 9", page);
    builder.line(&[(form_line.as_str(), 36.0), (page_line.as_str(), 520.0)])
}

/// Running header repeated at the top of continuation pages.
pub fn running_header(builder: PageBuilder) -> PageBuilder {
    builder.line(&[
        ("Debtor 1", 36.0),
        ("John Q. Smith", 120.0),
        ("Case number (if known)", 300.0),
        ("19-31415", 400.0),
    ])
}

/// Renumber and concatenate documents into one packet.
pub fn concat(documents: &[Vec<RawPage>]) -> Vec<RawPage> {
    documents
        .iter()
        .flatten()
        .cloned()
        .enumerate()
        .map(|(i, mut page)| {
            page.number = i as u32 + 1;
            page
        })
        .collect()
}

/// Move everything below the `at_line`-th line of a page onto a new page
/// that opens with the given repeated lines.
pub fn split_page(
    pages: &[RawPage],
    page_number: u32,
    at_line: usize,
    repeated: &[&[(&str, f32)]],
) -> Vec<RawPage> {
    let mut result = Vec::new();
    for page in pages {
        if page.number != page_number {
            let mut page = page.clone();
            if page.number > page_number {
                page.number += 1;
            }
            result.push(page);
            continue;
        }

        let mut ys: Vec<f32> = page.tokens.iter().map(|t| t.y).collect();
        ys.sort_by(|a, b| b.partial_cmp(a).unwrap());
        ys.dedup();
        let threshold = ys[at_line];

        let mut top = RawPage::new(page.number);
        let mut bottom = RawPage::new(page.number + 1);
        for (i, tokens) in repeated.iter().enumerate() {
            let y = TOP + 20.0 - i as f32 * STEP;
            bottom
                .tokens
                .extend(tokens.iter().map(|(text, x)| RawToken::new(*text, *x, y)));
        }
        for token in &page.tokens {
            if token.y > threshold {
                top.tokens.push(token.clone());
            } else {
                bottom.tokens.push(token.clone());
            }
        }
        top.tokens.push(RawToken::new(
            format!("Page {} of 9", page.number),
            520.0,
            30.0,
        ));
        result.push(top);
        result.push(bottom);
    }
    result
}

/// "Who owes / has an interest" options with the given one checked.
pub fn interest_options(checked: usize) -> Vec<(&'static str, bool)> {
    [
        "Debtor 1 only",
        "Debtor 2 only",
        "Debtor 1 and Debtor 2 only",
        "At least one of the debtors and another",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| (*text, i == checked))
    .collect()
}

/// Summary of Your Assets and Liabilities, two pages.
pub fn form_106sum() -> Vec<RawPage> {
    let b = caption(
        PageBuilder::new(),
        "106Sum",
        "Summary of Your Assets and Liabilities and Certain Statistical Information",
    )
    .text("Part 1: Summarize Your Assets")
    .line(&[("Your assets", 36.0), ("Value of what you own", 470.0)])
    .line(&[
        ("1a. Copy line 55, Total real estate, from Schedule A/B", 36.0),
        ("$", 460.0),
        ("350,882.00", 470.0),
    ])
    .line(&[
        ("1b. Copy line 62, Total personal property, from Schedule A/B", 36.0),
        ("$", 460.0),
        ("28,150.00", 470.0),
    ])
    .line(&[
        ("1c. Copy line 63, Total of all property on Schedule A/B", 36.0),
        ("$", 460.0),
        ("379,032.00", 470.0),
    ])
    .text("Part 2: Summarize Your Liabilities")
    .line(&[("Your liabilities", 36.0), ("Amount you owe", 470.0)])
    .line(&[
        ("2. Copy the total you listed in Column A, Amount of claim, from Schedule D", 36.0),
        ("$", 460.0),
        ("612,300.00", 470.0),
    ])
    .line(&[
        ("3a. Copy the total claims from Part 1 (priority unsecured claims) from line 6e", 36.0),
        ("$", 460.0),
        ("12,500.00", 470.0),
    ])
    .line(&[
        ("3b. Copy the total claims from Part 2 (nonpriority unsecured claims) from line 6j", 36.0),
        ("+", 450.0),
        ("$", 460.0),
        ("239,042.00", 470.0),
    ])
    .line(&[("Your total liabilities", 36.0), ("$", 460.0), ("863,842.00", 470.0)])
    .text("Part 3: Summarize Your Income and Expenses")
    .line(&[
        ("4. Copy your combined monthly income from line 12 of Schedule I", 36.0),
        ("$", 460.0),
        ("4,100.00", 470.0),
    ])
    .line(&[
        ("5. Copy your monthly expenses from line 22c of Schedule J", 36.0),
        ("$", 460.0),
        ("3,950.00", 470.0),
    ]);
    let b = footer(b, "106Sum", 1).new_page();

    let b = running_header(b)
        .text("Part 4: Answer These Questions for Administrative and Statistical Records")
        .text("6. Are you filing for bankruptcy under Chapters 7, 11, or 13?")
        .line(&[
            ("☐", 50.0),
            ("No. You have nothing to report on this part of the form.", 64.0),
        ])
        .line(&[("☒", 50.0), ("Yes", 64.0)])
        .text("7. What kind of debt do you have?")
        .line(&[
            ("☒", 50.0),
            ("Your debts are primarily consumer debts. Fill out lines 8-9g.", 64.0),
        ])
        .line(&[
            ("☐", 50.0),
            ("Your debts are not primarily consumer debts. Submit this form.", 64.0),
        ])
        .line(&[
            ("8. Copy your total current monthly income from Form 122A-1 Line 11", 36.0),
            ("$", 460.0),
            ("4,350.00", 470.0),
        ])
        .text("9. Copy the following special categories of claims from Part 4, line 6")
        .line(&[("9a. Domestic support obligations (Copy line 6a.)", 36.0), ("$", 460.0), ("0.00", 470.0)])
        .line(&[
            ("9b. Taxes and certain other debts you owe the government. (Copy line 6b.)", 36.0),
            ("$", 460.0),
            ("12,500.00", 470.0),
        ])
        .line(&[
            ("9c. Claims for death or personal injury while you were intoxicated. (Copy line 6c.)", 36.0),
            ("$", 460.0),
            ("0.00", 470.0),
        ])
        .line(&[("9d. Student loans. (Copy line 6f.)", 36.0), ("$", 460.0), ("130,000.00", 470.0)])
        .line(&[
            ("9e. Obligations arising out of a separation agreement or divorce (Copy line 6g.)", 36.0),
            ("$", 460.0),
            ("0.00", 470.0),
        ])
        .line(&[
            ("9f. Debts to pension or profit-sharing plans (Copy line 6h.)", 36.0),
            ("+", 450.0),
            ("$", 460.0),
            ("0.00", 470.0),
        ])
        .line(&[("9g. Total. Add lines 9a through 9f.", 36.0), ("$", 460.0), ("142,500.00", 470.0)]);
    footer(b, "106Sum", 2).build()
}

/// Schedule A/B: Property, three pages.
pub fn form_106ab() -> Vec<RawPage> {
    let b = caption(PageBuilder::new(), "106A/B", "Schedule A/B: Property")
        .text("Part 1: Describe Each Residence, Building, Land, or Other Real Estate You Own or Have an Interest In")
        .text("1. Do you own or have any legal or equitable interest in any residence, building, land, or similar property?")
        .line(&[("☐", 50.0), ("No. Go to Part 2.", 64.0)])
        .line(&[("☒", 50.0), ("Yes. Where is the property?", 64.0)])
        .line(&[
            ("Current value of the entire property", 396.0),
            ("Current value of the portion you own", 486.0),
        ])
        .line(&[
            ("1.1", 36.0),
            ("123 Main Street", 66.0),
            ("$", 400.0),
            ("325,882.00", 410.0),
            ("$", 490.0),
            ("325,882.00", 500.0),
        ])
        .line(&[("Springfield, IL 62704", 66.0)])
        .line(&[("What is the property? Check all that apply.", 66.0)])
        .boxes(
            66.0,
            &[
                ("Single-family home", true),
                ("Duplex or multi-unit building", false),
                ("Condominium or cooperative", false),
                ("Land", false),
            ],
        )
        .line(&[("Who has an interest in the property? Check one.", 66.0)])
        .boxes(66.0, &interest_options(2))
        .boxes(66.0, &[("Check if this is community property (see instructions)", false)])
        .line(&[("Nature of ownership interest:", 66.0), ("Fee simple", 250.0)])
        .line(&[("Other information: Primary residence", 66.0)])
        .line(&[
            ("1.2", 36.0),
            ("40 acres, County Road 9", 66.0),
            ("$", 400.0),
            ("50,000.00", 410.0),
            ("$", 490.0),
            ("25,000.00", 500.0),
        ])
        .line(&[("Sangamon County", 66.0)])
        .line(&[("What is the property? Check all that apply.", 66.0)])
        .boxes(
            66.0,
            &[
                ("Single-family home", false),
                ("Land", true),
                ("Investment property", true),
            ],
        )
        .line(&[("Who has an interest in the property? Check one.", 66.0)])
        .boxes(66.0, &interest_options(3))
        .boxes(66.0, &[("Check if this is community property (see instructions)", true)])
        .line(&[("Nature of ownership interest:", 66.0), ("Tenancy in common", 250.0)])
        .line(&[
            ("2. Add the dollar value of the portion you own for all of your entries from Part 1. Write that number here.", 36.0),
            ("$", 490.0),
            ("350,882.00", 500.0),
        ]);
    let b = footer(b, "106A/B", 1).new_page();

    let b = running_header(b)
        .text("Part 2: Describe Your Vehicles")
        .text("3. Cars, vans, trucks, tractors, sport utility vehicles, motorcycles")
        .line(&[("☐", 50.0), ("No", 64.0)])
        .line(&[("☒", 50.0), ("Yes", 64.0)])
        .line(&[
            ("Make", 66.0),
            ("Model", 160.0),
            ("Year", 240.0),
            ("Mileage", 290.0),
            ("Current value of the entire property", 396.0),
            ("Current value of the portion you own", 486.0),
        ])
        .line(&[
            ("3.1", 36.0),
            ("Chevrolet", 66.0),
            ("Silverado", 160.0),
            ("2015", 240.0),
            ("98,000", 290.0),
            ("$", 400.0),
            ("18,500.00", 410.0),
            ("$", 490.0),
            ("18,500.00", 500.0),
        ])
        .line(&[("Who has an interest in the property? Check one.", 66.0)])
        .boxes(66.0, &interest_options(0))
        .boxes(66.0, &[("Check if this is community property (see instructions)", false)])
        .line(&[("Other information: Lien held by Ally Financial", 66.0)])
        .text("4. Watercraft, aircraft, motor homes, ATVs and other recreational vehicles")
        .line(&[("☐", 50.0), ("No", 64.0)])
        .line(&[("☒", 50.0), ("Yes", 64.0)])
        .line(&[
            ("4.1", 36.0),
            ("Ski-Doo", 66.0),
            ("MXZ", 160.0),
            ("2012", 240.0),
            ("$", 400.0),
            ("2,400.00", 410.0),
            ("$", 490.0),
            ("2,400.00", 500.0),
        ])
        .line(&[("Who has an interest in the property? Check one.", 66.0)])
        .boxes(66.0, &interest_options(1))
        .line(&[
            ("5. Add the dollar value of the portion you own for all of your entries from Part 2. Write that number here.", 36.0),
            ("$", 490.0),
            ("20,900.00", 500.0),
        ])
        .text("Part 3: Describe Your Personal and Household Items")
        .text("Do you own or have any legal or equitable interest in any of the following items?")
        .line(&[
            ("6.", 36.0),
            ("Household goods and furnishings: sofa, dining set, beds", 66.0),
            ("$", 490.0),
            ("2,500.00", 500.0),
        ])
        .line(&[
            ("7.", 36.0),
            ("Electronics: television, laptop", 66.0),
            ("$", 490.0),
            ("1,200.00", 500.0),
        ])
        .line(&[
            ("15. Add the dollar value of all of your entries from Part 3. Write that number here.", 36.0),
            ("$", 490.0),
            ("3,700.00", 500.0),
        ]);
    let b = footer(b, "106A/B", 2).new_page();

    let b = running_header(b)
        .text("Part 4: Describe Your Financial Assets")
        .line(&[("16.", 36.0), ("Cash", 66.0), ("$", 490.0), ("150.00", 500.0)])
        .line(&[("17.", 36.0), ("Deposits of money", 66.0)])
        .line(&[
            ("17.1", 36.0),
            ("Checking account: First National Bank", 66.0),
            ("$", 490.0),
            ("3,400.00", 500.0),
        ])
        .line(&[
            ("36. Add the dollar value of all of your entries from Part 4. Write that number here.", 36.0),
            ("$", 490.0),
            ("3,550.00", 500.0),
        ])
        .text("Part 5: Describe Any Business-Related Property You Own or Have an Interest In")
        .text("37. Do you own or have any legal or equitable interest in any business-related property?")
        .line(&[("☒", 50.0), ("No. Go to Part 6.", 64.0)])
        .line(&[
            ("45. Add the dollar value of all of your entries from Part 5. Write that number here.", 36.0),
            ("$", 490.0),
            ("0.00", 500.0),
        ])
        .text("Part 6: Describe Any Farm- and Commercial Fishing-Related Property You Own or Have an Interest In")
        .text("46. Do you own or have any legal or equitable interest in any farm- or commercial fishing-related property?")
        .line(&[("☒", 50.0), ("No. Go to Part 7.", 64.0)])
        .line(&[
            ("52. Add the dollar value of all of your entries from Part 6. Write that number here.", 36.0),
            ("$", 490.0),
            ("0.00", 500.0),
        ])
        .text("Part 7: Describe All Property You Own or Have an Interest in That You Did Not List Above")
        .text("53. Do you have other property of any kind you did not already list?")
        .line(&[("☒", 50.0), ("No", 64.0)])
        .line(&[
            ("54. Add the dollar value of all of your entries from Part 7. Write that number here.", 36.0),
            ("$", 490.0),
            ("0.00", 500.0),
        ])
        .text("Part 8: List the Totals of Each Part of this Form")
        .line(&[("55. Part 1: Total real estate, line 2", 36.0), ("$", 490.0), ("350,882.00", 500.0)])
        .line(&[("56. Part 2: Total vehicles, line 5", 36.0), ("$", 490.0), ("20,900.00", 500.0)])
        .line(&[
            ("57. Part 3: Total personal and household items, line 15", 36.0),
            ("$", 490.0),
            ("3,700.00", 500.0),
        ])
        .line(&[("58. Part 4: Total financial assets, line 36", 36.0), ("$", 490.0), ("3,550.00", 500.0)])
        .line(&[
            ("59. Part 5: Total business-related property, line 45", 36.0),
            ("$", 490.0),
            ("0.00", 500.0),
        ])
        .line(&[
            ("60. Part 6: Total farm- and fishing-related property, line 52", 36.0),
            ("$", 490.0),
            ("0.00", 500.0),
        ])
        .line(&[
            ("61. Part 7: Total other property not listed, line 54", 36.0),
            ("+", 480.0),
            ("$", 490.0),
            ("0.00", 500.0),
        ])
        .line(&[
            ("62. Total personal property. Add lines 56 through 61.", 36.0),
            ("$", 490.0),
            ("28,150.00", 500.0),
        ])
        .line(&[
            ("63. Total of all property on Schedule A/B. Add line 55 + line 62.", 36.0),
            ("$", 490.0),
            ("379,032.00", 500.0),
        ]);
    footer(b, "106A/B", 3).build()
}

/// Schedule D: Creditors Who Have Claims Secured by Property, two pages.
pub fn form_106d() -> Vec<RawPage> {
    let b = caption(
        PageBuilder::new(),
        "106D",
        "Schedule D: Creditors Who Have Claims Secured by Property",
    )
    .text("1. Do any creditors have claims secured by your property?")
    .line(&[
        ("☐", 50.0),
        ("No. Check this box and submit this form to the court with your other schedules.", 64.0),
    ])
    .line(&[("☒", 50.0), ("Yes. Fill in all of the information below.", 64.0)])
    .text("Part 1: List All Secured Claims")
    .text("2. List all secured claims. If a creditor has more than one secured claim, list the creditor separately for each claim.")
    .line(&[("Column A", 400.0), ("Column B", 472.0), ("Column C", 540.0)])
    .line(&[
        ("2.1", 36.0),
        ("Ally Financial", 66.0),
        ("2015 Chevrolet Silverado", 250.0),
        ("$", 400.0),
        ("18,250.00", 408.0),
        ("$", 472.0),
        ("18,500.00", 480.0),
        ("$", 540.0),
        ("0.00", 548.0),
    ])
    .line(&[("PO Box 380901", 66.0)])
    .line(&[("Bloomington, MN 55438", 66.0)])
    .line(&[("As of the date you file, the claim is: Check all that apply.", 250.0)])
    .line(&[
        ("☐", 250.0),
        ("Contingent", 262.0),
        ("☐", 320.0),
        ("Unliquidated", 332.0),
        ("☒", 400.0),
        ("Disputed", 412.0),
    ])
    .line(&[("Nature of lien. Check all that apply.", 250.0)])
    .boxes(
        250.0,
        &[
            ("An agreement you made (such as mortgage or secured car loan)", true),
            ("Statutory lien (such as tax lien, mechanic's lien)", false),
            ("Judgment lien from a lawsuit", false),
            ("Other (including a right to offset)", false),
        ],
    )
    .line(&[("Who owes the debt? Check one.", 66.0)])
    .boxes(66.0, &interest_options(0))
    .boxes(66.0, &[("Check if this claim relates to a community debt", false)])
    .line(&[
        ("Date debt was incurred", 66.0),
        ("06/2016", 170.0),
        ("Last 4 digits of account number", 250.0),
        ("4432", 400.0),
    ])
    .line(&[
        ("2.2", 36.0),
        ("Wells Fargo Home Mortgage", 66.0),
        ("123 Main Street, Springfield, IL", 250.0),
        ("$", 400.0),
        ("594,050.00", 408.0),
        ("$", 472.0),
        ("325,882.00", 480.0),
        ("$", 540.0),
        ("268,168.00", 548.0),
    ])
    .line(&[("PO Box 10335", 66.0)])
    .line(&[("Des Moines, IA 50306", 66.0)])
    .line(&[("As of the date you file, the claim is: Check all that apply.", 250.0)])
    .line(&[
        ("☐", 250.0),
        ("Contingent", 262.0),
        ("☐", 320.0),
        ("Unliquidated", 332.0),
        ("☐", 400.0),
        ("Disputed", 412.0),
    ])
    .line(&[("Nature of lien. Check all that apply.", 250.0)])
    .boxes(
        250.0,
        &[
            ("An agreement you made (such as mortgage or secured car loan)", true),
            ("Statutory lien (such as tax lien, mechanic's lien)", false),
            ("Judgment lien from a lawsuit", true),
            ("Other (including a right to offset)", false),
        ],
    )
    .line(&[("Who owes the debt? Check one.", 66.0)])
    .boxes(66.0, &interest_options(2))
    .boxes(66.0, &[("Check if this claim relates to a community debt", true)])
    .line(&[
        ("Date debt was incurred", 66.0),
        ("03/14/2011", 170.0),
        ("Last 4 digits of account number", 250.0),
        ("9071", 400.0),
    ])
    .line(&[
        ("Add the dollar value of your entries in Column A on this page. Write that number here:", 36.0),
        ("$", 400.0),
        ("612,300.00", 408.0),
    ]);
    let b = footer(b, "106D", 1).new_page();

    let b = running_header(b)
        .text("Part 2: List Others to Be Notified for a Debt That You Already Listed")
        .text("Use this page only if you have others to be notified about your bankruptcy for a debt that you already listed in Part 1.")
        .line(&[
            ("Name and address", 36.0),
            ("On which line in Part 1 did you enter the creditor?", 330.0),
        ])
        .line(&[
            ("Law Office of Smith & Co", 36.0),
            ("2.1", 340.0),
            ("xxxx-4432", 430.0),
        ])
        .line(&[("100 Legal Way", 36.0)])
        .line(&[("Chicago, IL 60601", 36.0)]);
    footer(b, "106D", 2).build()
}

/// Schedule E/F: Creditors Who Have Unsecured Claims, three pages.
pub fn form_106ef() -> Vec<RawPage> {
    let b = caption(
        PageBuilder::new(),
        "106E/F",
        "Schedule E/F: Creditors Who Have Unsecured Claims",
    )
    .text("Part 1: List All of Your PRIORITY Unsecured Claims")
    .text("1. Do any creditors have priority unsecured claims against you?")
    .line(&[("☐", 50.0), ("No. Go to Part 2.", 64.0)])
    .line(&[("☒", 50.0), ("Yes.", 64.0)])
    .text("2. List all of your priority unsecured claims.")
    .line(&[
        ("Total claim", 340.0),
        ("Priority amount", 424.0),
        ("Nonpriority amount", 504.0),
    ])
    .line(&[
        ("2.1", 36.0),
        ("Internal Revenue Service", 66.0),
        ("☒", 240.0),
        ("Debtor 1 only", 252.0),
        ("$", 340.0),
        ("12,500.00", 348.0),
        ("$", 424.0),
        ("12,500.00", 432.0),
        ("$", 504.0),
        ("0.00", 512.0),
    ])
    .line(&[
        ("Centralized Insolvency Operation", 66.0),
        ("☐", 240.0),
        ("Debtor 2 only", 252.0),
    ])
    .line(&[
        ("PO Box 7346", 66.0),
        ("☐", 240.0),
        ("Debtor 1 and Debtor 2 only", 252.0),
    ])
    .line(&[
        ("Philadelphia, PA 19101", 66.0),
        ("☐", 240.0),
        ("At least one of the debtors and another", 252.0),
    ])
    .boxes(240.0, &[("Check if this claim is for a community debt", false)])
    .line(&[("Is the claim subject to offset?", 66.0)])
    .boxes(66.0, &[("No", true), ("Yes", false)])
    .line(&[("As of the date you file, the claim is: Check all that apply.", 66.0)])
    .line(&[
        ("☐", 66.0),
        ("Contingent", 80.0),
        ("☐", 160.0),
        ("Unliquidated", 172.0),
        ("☐", 260.0),
        ("Disputed", 272.0),
    ])
    .line(&[("Type of PRIORITY unsecured claim:", 66.0)])
    .boxes(
        66.0,
        &[
            ("Domestic support obligations", false),
            ("Taxes and certain other debts you owe the government", true),
            ("Claims for death or personal injury while you were intoxicated", false),
            ("Other. Specify", false),
        ],
    )
    .line(&[("When was the debt incurred?", 66.0), ("04/15/2017", 170.0)])
    .line(&[("Last 4 digits of account number", 66.0), ("0142", 170.0)]);
    let b = footer(b, "106E/F", 1).new_page();

    let b = running_header(b)
        .text("Part 2: List All of Your NONPRIORITY Unsecured Claims")
        .text("3. Do any creditors have nonpriority unsecured claims against you?")
        .line(&[("☐", 50.0), ("No. You have nothing to report in this part.", 64.0)])
        .line(&[("☒", 50.0), ("Yes.", 64.0)])
        .text("4. List all of your nonpriority unsecured claims in the alphabetical order of the creditor who holds each claim.")
        .line(&[("Total claim", 490.0)])
        .line(&[
            ("4.1", 36.0),
            ("Sallie Mae", 66.0),
            ("☐", 240.0),
            ("Contingent", 252.0),
            ("$", 486.0),
            ("130,000.00", 494.0),
        ])
        .line(&[("PO Box 3319", 66.0), ("☐", 240.0), ("Unliquidated", 252.0)])
        .line(&[("Wilmington, DE 19804", 66.0), ("☐", 240.0), ("Disputed", 252.0)])
        .line(&[("Who incurred the debt? Check one.", 66.0)])
        .boxes(66.0, &interest_options(0))
        .boxes(66.0, &[("Check if this claim is for a community debt", false)])
        .line(&[("Is the claim subject to offset?", 66.0)])
        .boxes(66.0, &[("No", true), ("Yes", false)])
        .line(&[("Type of NONPRIORITY unsecured claim:", 66.0)])
        .boxes(
            66.0,
            &[
                ("Student loans", true),
                ("Obligations arising out of a separation agreement or divorce that you did not report as priority claims", false),
                ("Debts to pension or profit-sharing plans, and other similar debts", false),
                ("Other. Specify", false),
            ],
        )
        .line(&[("When was the debt incurred?", 66.0), ("2012", 170.0)])
        .line(&[("Last 4 digits of account number", 66.0), ("8813", 170.0)])
        .line(&[
            ("4.2", 36.0),
            ("Capital One Bank", 66.0),
            ("☐", 240.0),
            ("Contingent", 252.0),
            ("$", 486.0),
            ("109,042.00", 494.0),
        ])
        .line(&[("PO Box 30285", 66.0), ("☐", 240.0), ("Unliquidated", 252.0)])
        .line(&[("Salt Lake City, UT 84130", 66.0), ("☒", 240.0), ("Disputed", 252.0)])
        .line(&[("Who incurred the debt? Check one.", 66.0)])
        .boxes(66.0, &interest_options(2))
        .boxes(66.0, &[("Check if this claim is for a community debt", true)])
        .line(&[("Is the claim subject to offset?", 66.0)])
        .boxes(66.0, &[("No", false), ("Yes", true)])
        .line(&[("Type of NONPRIORITY unsecured claim:", 66.0)])
        .boxes(
            66.0,
            &[
                ("Student loans", false),
                ("Obligations arising out of a separation agreement or divorce that you did not report as priority claims", false),
                ("Debts to pension or profit-sharing plans, and other similar debts", false),
                ("Other. Specify", true),
            ],
        )
        .line(&[("When was the debt incurred?", 66.0)])
        .line(&[("Last 4 digits of account number", 66.0), ("7781", 170.0)])
        .text("Part 3: List Others to Be Notified About a Debt That You Already Listed")
        .text("5. Use this page only if you have others to be notified about your bankruptcy.")
        .line(&[
            ("Name and address", 36.0),
            ("On which entry in Part 1 or Part 2 did you list the original creditor?", 330.0),
        ])
        .line(&[
            ("Linebarger Goggan Blair", 36.0),
            ("4.2", 340.0),
            ("xxxx-7781", 430.0),
        ])
        .line(&[("PO Box 17428", 36.0)])
        .line(&[("Austin, TX 78760", 36.0)]);
    let b = footer(b, "106E/F", 2).new_page();

    let b = running_header(b)
        .text("Part 4: Add the Amounts for Each Type of Unsecured Claim")
        .line(&[("6a. Domestic support obligations", 36.0), ("$", 486.0), ("0.00", 494.0)])
        .line(&[
            ("6b. Taxes and certain other debts you owe the government", 36.0),
            ("$", 486.0),
            ("12,500.00", 494.0),
        ])
        .line(&[
            ("6c. Claims for death or personal injury while you were intoxicated", 36.0),
            ("$", 486.0),
            ("0.00", 494.0),
        ])
        .line(&[
            ("6d. Other. Add all other priority unsecured claims.", 36.0),
            ("$", 486.0),
            ("0.00", 494.0),
        ])
        .line(&[("6e. Total. Add lines 6a through 6d.", 36.0), ("$", 486.0), ("12,500.00", 494.0)])
        .line(&[("6f. Student loans", 36.0), ("$", 486.0), ("130,000.00", 494.0)])
        .line(&[
            ("6g. Obligations arising out of a separation agreement or divorce", 36.0),
            ("$", 486.0),
            ("0.00", 494.0),
        ])
        .line(&[
            ("6h. Debts to pension or profit-sharing plans, and other similar debts", 36.0),
            ("$", 486.0),
            ("0.00", 494.0),
        ])
        .line(&[
            ("6i. Other. Add all other nonpriority unsecured claims.", 36.0),
            ("$", 486.0),
            ("109,042.00", 494.0),
        ])
        .line(&[("6j. Total. Add lines 6f through 6i.", 36.0), ("$", 486.0), ("239,042.00", 494.0)])
        .line(&[("6k. Total claims. Add lines 6e and 6j.", 36.0), ("$", 486.0), ("251,542.00", 494.0)]);
    footer(b, "106E/F", 3).build()
}
