use crate::cli::{
    args::HashArgs,
    config::{AlphabetOrigin, alphabet_origin, load_alphabet, read_file, write_output},
    global::GlobalArgs,
    prompt::Prompter,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tagbase::{
    Argon2Params, Argon2id, EncodeOptions, HashInput, Settings, convenience::hash_encode,
};

/// Resolved inputs for one hash run.
#[derive(Debug)]
struct HashPlan {
    message: PathBuf,
    nonce: PathBuf,
    secret: Source,
    data: Source,
    alphabet: AlphabetOrigin,
    params: Argon2Params,
    output: Option<PathBuf>,
}

/// An input file that is optional while it is only a configured default.
#[derive(Debug)]
enum Source {
    Required(PathBuf),
    Default(PathBuf),
}

impl Source {
    fn read(&self) -> Result<Vec<u8>, tagbase::Error> {
        match self {
            Source::Required(path) => read_file(path),
            Source::Default(path) if !path.exists() => {
                tracing::debug!(path = %path.display(), "default input missing, using empty value");
                Ok(Vec::new())
            }
            Source::Default(path) => read_file(path),
        }
    }
}

impl HashPlan {
    fn from_args(args: &HashArgs, settings: &Settings) -> Self {
        let files = &settings.files;
        let or_default = |arg: &Option<PathBuf>, default: &str| {
            arg.clone().unwrap_or_else(|| Settings::resolve(default))
        };
        let optional = |arg: &Option<PathBuf>, default: &str| match arg {
            Some(path) => Source::Required(path.clone()),
            None => Source::Default(Settings::resolve(default)),
        };

        let defaults = settings.argon2.params();
        let parallelism = args.parallelism.unwrap_or(defaults.parallelism);
        let memory_kib = args.memory_kib.unwrap_or(match (args.parallelism, settings.argon2.memory_kib) {
            (None, Some(configured)) => configured,
            _ => Argon2Params::default_memory_kib(parallelism),
        });

        Self {
            message: or_default(&args.message, &files.message),
            nonce: or_default(&args.nonce, &files.nonce),
            secret: optional(&args.secret, &files.secret),
            data: optional(&args.data, &files.data),
            alphabet: alphabet_origin(&args.alphabet, settings),
            params: Argon2Params {
                tag_length: args.tag_length.unwrap_or(defaults.tag_length),
                iterations: args.iterations.unwrap_or(defaults.iterations),
                parallelism,
                memory_kib,
            },
            output: args.output.clone(),
        }
    }

    /// Asks for every value in turn, offering the current one as default.
    fn prompt<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        settings: &Settings,
    ) -> io::Result<()> {
        let files = &settings.files;
        self.message = prompter.path(
            "Enter message file name (file must be 0 to 4294967295 bytes): ",
            &files.message,
        )?;
        self.nonce = prompter.path(
            "\nEnter nonce file name (file must be 8 to 4294967295 bytes): ",
            &files.nonce,
        )?;
        self.secret = Source::Required(prompter.path(
            "\nEnter secret value file name (file must be 0 to 4294967295 bytes): ",
            &files.secret,
        )?);
        self.data = Source::Required(prompter.path(
            "\nEnter associated data file name (file must be 0 to 32 bytes): ",
            &files.data,
        )?);
        self.alphabet = AlphabetOrigin::File(prompter.path(
            "\nEnter encoding character set file name (file must have at least 2 characters): ",
            &files.alphabet,
        )?);

        let params = &mut self.params;
        params.tag_length = prompter.number(
            "\nEnter tag length (4 to 4294967295 bytes): ",
            params.tag_length,
        )?;
        params.iterations =
            prompter.number("\nNumber of iterations (1 to 4294967295): ", params.iterations)?;
        params.parallelism = prompter.number(
            "\nDegree of parallelism (1 to 16777215): ",
            params.parallelism,
        )?;
        params.memory_kib = prompter.number(
            "\nMemory size (8*parallelism to 4294967295 kibibytes): ",
            Argon2Params::default_memory_kib(params.parallelism),
        )?;

        self.output = Some(prompter.path("\nEnter output file name: ", &files.output)?);
        Ok(())
    }
}

pub fn handle(
    args: HashArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = HashPlan::from_args(&args, settings);
    if args.interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stderr());
        plan.prompt(&mut prompter, settings)?;
    }
    tracing::debug!(?plan, "resolved hash inputs");

    // A bad alphabet must fail before any hashing work
    let alphabet = load_alphabet(&plan.alphabet)?;
    tracing::info!(base = alphabet.base(), alphabet = %plan.alphabet, "loaded alphabet");

    let input = HashInput {
        message: read_file(&plan.message)?,
        nonce: read_file(&plan.nonce)?,
        secret: plan.secret.read()?,
        associated_data: plan.data.read()?,
    };
    let hasher = Argon2id::new(plan.params);

    let rendered = if args.hex {
        use tagbase::TagHasher;
        hex::encode(hasher.hash(&input)?).into_bytes()
    } else {
        let options = EncodeOptions::default().with_header(args.header.resolve(settings.output.header));
        hash_encode(&input, &hasher, &alphabet, &options)?.encoded
    };

    write_output(plan.output.as_deref(), &rendered)?;
    Ok(())
}
