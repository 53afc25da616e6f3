use clap::{Parser, Subcommand};
use hospital_core::{
    open_store, CoreConfig, NewPatient, Patient, PatientChanges, PatientService, StoreBackend,
    DEFAULT_COLLECTION_NAME, DEFAULT_DATABASE_NAME, DEFAULT_MONGO_DETAILS,
};
use hospital_types::{EmailAddress, NonEmptyText, PatientAge};

#[derive(Parser)]
#[command(name = "hospital")]
#[command(about = "Hospital patient record CLI")]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_DETAILS", default_value = DEFAULT_MONGO_DETAILS)]
    mongo_details: String,
    /// Database holding the patient collection
    #[arg(long, env = "HOSPITAL_DATABASE", default_value = DEFAULT_DATABASE_NAME)]
    database: String,
    /// Patient collection name
    #[arg(long, env = "HOSPITAL_COLLECTION", default_value = DEFAULT_COLLECTION_NAME)]
    collection: String,
    /// Store backend (mongodb or memory)
    #[arg(long, env = "HOSPITAL_STORE", default_value = "mongodb")]
    store: StoreBackend,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Show one patient
    Show {
        /// Patient ID (24 hex characters)
        id: String,
    },
    /// Add a patient
    Add {
        /// Full name
        fullname: NonEmptyText,
        /// Email address
        email: EmailAddress,
        /// Gender
        gender: NonEmptyText,
        /// Age (1 to 99)
        age: PatientAge,
    },
    /// Update the given fields of a patient
    Update {
        /// Patient ID (24 hex characters)
        id: String,
        #[arg(long)]
        fullname: Option<NonEmptyText>,
        #[arg(long)]
        email: Option<EmailAddress>,
        #[arg(long)]
        gender: Option<NonEmptyText>,
        #[arg(long)]
        age: Option<PatientAge>,
    },
    /// Remove a patient
    Remove {
        /// Patient ID (24 hex characters)
        id: String,
    },
}

fn print_patient(patient: &Patient) {
    println!(
        "ID: {}, Name: {}, Email: {}, Gender: {}, Age: {}",
        patient.id, patient.fullname, patient.email, patient.gender, patient.age
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'hospital --help' for commands");
        return Ok(());
    };

    let cfg = CoreConfig::new(cli.store, cli.mongo_details, &cli.database, &cli.collection)?;
    let service = PatientService::new(open_store(&cfg).await?);

    match command {
        Commands::List => {
            let patients = service.list_all().await?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in &patients {
                    print_patient(patient);
                }
            }
        }
        Commands::Show { id } => match service.get_by_id(&id).await? {
            Some(patient) => print_patient(&patient),
            None => eprintln!("Patient does not exist: {}", id),
        },
        Commands::Add {
            fullname,
            email,
            gender,
            age,
        } => {
            let patient = service
                .create(NewPatient {
                    fullname,
                    email,
                    gender,
                    age,
                })
                .await?;
            println!("Added patient with ID: {}", patient.id);
        }
        Commands::Update {
            id,
            fullname,
            email,
            gender,
            age,
        } => {
            let changes = PatientChanges {
                fullname,
                email,
                gender,
                age,
            };
            if service.update(&id, changes).await? {
                println!("Updated patient with ID: {}", id);
            } else {
                eprintln!("Failed to update patient with ID: {}", id);
            }
        }
        Commands::Remove { id } => {
            if service.delete(&id).await? {
                println!("Removed patient with ID: {}", id);
            } else {
                eprintln!("Failed to remove patient with ID: {}", id);
            }
        }
    }

    Ok(())
}
