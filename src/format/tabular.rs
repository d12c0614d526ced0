/// Output format enum matching NCBI BLAST -outfmt options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 6 = Tabular output (tab-separated values)
    #[default]
    Tabular = 6,
    /// 7 = Tabular output with comment lines (headers)
    TabularWithComments = 7,
}

impl OutputFormat {
    /// Parse output format from string (e.g., "6", "7 qseqid sseqid")
    /// Returns the format and any custom field specifications
    pub fn parse(s: &str) -> Result<(Self, Option<String>), String> {
        let s = s.trim();

        let (fmt_str, fields) = if let Some(idx) = s.find(char::is_whitespace) {
            let (f, rest) = s.split_at(idx);
            (f.trim(), Some(rest.trim().to_string()))
        } else {
            (s, None)
        };

        let format = match fmt_str {
            "6" => OutputFormat::Tabular,
            "7" => OutputFormat::TabularWithComments,
            _ => {
                return Err(format!(
                    "Unsupported output format: {}. Supported: 6, 7",
                    fmt_str
                ))
            }
        };

        Ok((format, fields.filter(|f| !f.is_empty())))
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Fields NCBI BLAST prints for a bare `6`/`7` or the `std` keyword.
pub const STD_FIELDS: [&str; 12] = [
    "qaccver", "saccver", "pident", "length", "mismatch", "gapopen", "qstart", "qend", "sstart",
    "send", "evalue", "bitscore",
];

/// A single column of a tabular blast report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabularField {
    QuerySeqId,
    SubjectSeqId,
    PercentIdentity,
    QueryCoverage,
    QueryLength,
    SubjectLength,
    AlignmentLength,
    BitScore,
    EValue,
    /// Any field the resolver does not interpret; carried as metadata
    Other(String),
}

/// Columns every hit table must provide, in the default layout order.
pub const REQUIRED_FIELDS: [TabularField; 9] = [
    TabularField::QuerySeqId,
    TabularField::SubjectSeqId,
    TabularField::PercentIdentity,
    TabularField::QueryCoverage,
    TabularField::QueryLength,
    TabularField::SubjectLength,
    TabularField::AlignmentLength,
    TabularField::BitScore,
    TabularField::EValue,
];

impl TabularField {
    pub fn from_name(name: &str) -> Self {
        match name {
            "qseqid" | "qaccver" | "qacc" => TabularField::QuerySeqId,
            "sseqid" | "saccver" | "sacc" => TabularField::SubjectSeqId,
            "pident" => TabularField::PercentIdentity,
            "qcovs" | "qcovhsp" => TabularField::QueryCoverage,
            "qlen" => TabularField::QueryLength,
            "slen" => TabularField::SubjectLength,
            "length" => TabularField::AlignmentLength,
            "bitscore" => TabularField::BitScore,
            "evalue" => TabularField::EValue,
            other => TabularField::Other(other.to_string()),
        }
    }

    /// Field name used in error messages and in the default layout.
    pub fn canonical_name(&self) -> &str {
        match self {
            TabularField::QuerySeqId => "qseqid",
            TabularField::SubjectSeqId => "sseqid",
            TabularField::PercentIdentity => "pident",
            TabularField::QueryCoverage => "qcovs",
            TabularField::QueryLength => "qlen",
            TabularField::SubjectLength => "slen",
            TabularField::AlignmentLength => "length",
            TabularField::BitScore => "bitscore",
            TabularField::EValue => "evalue",
            TabularField::Other(name) => name,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, TabularField::Other(_))
    }
}

/// Positions of the interpreted columns within a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub query: usize,
    pub subject: usize,
    pub identity: usize,
    pub coverage: usize,
    pub query_length: usize,
    pub subject_length: usize,
    pub length: usize,
    pub bit_score: usize,
    pub e_value: usize,
    /// Positions of metadata columns, in declaration order
    pub metadata: Vec<usize>,
    pub metadata_names: Vec<String>,
}

/// Column layout of a hit table, built from an outfmt specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    format: OutputFormat,
    names: Vec<String>,
    fields: Vec<TabularField>,
}

impl TableSchema {
    /// Build a schema from a BLAST `-outfmt` value such as
    /// `"6 qseqid sseqid pident qcovs qlen slen length bitscore evalue"`.
    ///
    /// A bare format code expands to the NCBI `std` fields, as blastp does.
    pub fn from_outfmt(spec: &str) -> Result<Self, String> {
        let (format, fields) = OutputFormat::parse(spec)?;

        let mut names: Vec<String> = Vec::new();
        match fields {
            None => names.extend(STD_FIELDS.iter().map(|s| s.to_string())),
            Some(list) => {
                for name in list.split(|c: char| c.is_whitespace() || c == ',') {
                    if name.is_empty() {
                        continue;
                    }
                    if name == "std" {
                        names.extend(STD_FIELDS.iter().map(|s| s.to_string()));
                    } else {
                        names.push(name.to_string());
                    }
                }
            }
        }

        let fields = names.iter().map(|n| TabularField::from_name(n)).collect();
        Ok(Self {
            format,
            names,
            fields,
        })
    }

    /// The default nine-column layout.
    pub fn rbh_default() -> Self {
        let names: Vec<String> = REQUIRED_FIELDS
            .iter()
            .map(|f| f.canonical_name().to_string())
            .collect();
        Self {
            format: OutputFormat::Tabular,
            names,
            fields: REQUIRED_FIELDS.to_vec(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    /// Render back into a value suitable for `blastp -outfmt`.
    pub fn to_outfmt(&self) -> String {
        let mut out = self.format.code().to_string();
        for name in &self.names {
            out.push(' ');
            out.push_str(name);
        }
        out
    }

    /// Locate every required column, failing when one is absent or repeated.
    pub fn column_index(&self) -> Result<ColumnIndex, String> {
        let position = |wanted: &TabularField| -> Result<usize, String> {
            let mut found = self
                .fields
                .iter()
                .enumerate()
                .filter(|(_, f)| *f == wanted)
                .map(|(i, _)| i);
            match (found.next(), found.next()) {
                (Some(i), None) => Ok(i),
                (None, _) => Err(format!(
                    "missing required column '{}'",
                    wanted.canonical_name()
                )),
                (Some(_), Some(_)) => Err(format!(
                    "column '{}' appears more than once",
                    wanted.canonical_name()
                )),
            }
        };

        let mut metadata = Vec::new();
        let mut metadata_names = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            if !field.is_required() {
                metadata.push(i);
                metadata_names.push(self.names[i].clone());
            }
        }

        Ok(ColumnIndex {
            query: position(&TabularField::QuerySeqId)?,
            subject: position(&TabularField::SubjectSeqId)?,
            identity: position(&TabularField::PercentIdentity)?,
            coverage: position(&TabularField::QueryCoverage)?,
            query_length: position(&TabularField::QueryLength)?,
            subject_length: position(&TabularField::SubjectLength)?,
            length: position(&TabularField::AlignmentLength)?,
            bit_score: position(&TabularField::BitScore)?,
            e_value: position(&TabularField::EValue)?,
            metadata,
            metadata_names,
        })
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::rbh_default()
    }
}
